use anyhow::{Context, Result};
use bus::MessageQueue;
use html::tags::{self, CommonAttributes};
use html::{Attributes, DocumentOptions, Url, attributes};
use input_core::{RawClickEvent, RawInputEvent};
use std::sync::mpsc::Sender;
use view::{ClickMessageData, Events, KeyedChildren, RenderState, View, ViewElement};

#[derive(Clone, Debug)]
enum Message {
    Increment,
    Reset,
    Rename(String),
}

struct Counter {
    count: u32,
    label: String,
}

impl Counter {
    fn update(&mut self, message: Message) {
        match message {
            Message::Increment => self.count += 1,
            Message::Reset => self.count = 0,
            Message::Rename(label) => self.label = label,
        }
    }
}

enum Step {
    Click(&'static str, RawClickEvent),
    Input(&'static str, &'static str),
}

pub fn run(clicks: u32) -> Result<()> {
    let options = options()?;
    let queue = MessageQueue::new();
    let mut state: RenderState<Message, Sender<Message>> = RenderState::new(queue.sender());
    let mut model = Counter {
        count: 0,
        label: "count".to_string(),
    };

    let mut script: Vec<Step> = (0..clicks)
        .map(|_| Step::Click("/controls/increment", RawClickEvent::primary()))
        .collect();
    // Opens in a new tab, so the counter must not move.
    script.push(Step::Click(
        "/controls/increment",
        RawClickEvent {
            ctrl_key: true,
            ..RawClickEvent::default()
        },
    ));
    script.push(Step::Input("/controls/label", "clicks so far"));
    script.push(Step::Click("/stale/path", RawClickEvent::primary()));
    script.push(Step::Click("/controls/reset", RawClickEvent::primary()));

    let view = counter_view(options.clone(), &model)?;
    println!("{}", view.to_html_string());
    state.set_event_map(view.event_map());

    for step in script {
        match step {
            Step::Click(path, mut event) => state.handle_click(path, &mut event),
            Step::Input(path, value) => state.handle_input(path, &RawInputEvent::new(value)),
        }
        let messages = queue.drain();
        if messages.is_empty() {
            continue;
        }
        for message in messages {
            log::debug!("update: {message:?}");
            model.update(message);
        }
        let view = counter_view(options.clone(), &model)?;
        println!("{}", view.to_html_string());
        state.set_event_map(view.event_map());
    }
    Ok(())
}

fn options() -> Result<DocumentOptions> {
    let url = Url::parse("https://example.com/counter").context("demo page url")?;
    let icon = Url::parse("https://example.com/icon.png").context("demo icon url")?;
    Ok(DocumentOptions::new(
        "Counter",
        "nview demo",
        "A counter driven by scripted events",
        icon.clone(),
        icon,
        url,
    ))
}

fn counter_view(options: DocumentOptions, model: &Counter) -> Result<View<Message>> {
    let mut controls = KeyedChildren::new();
    controls.try_insert(
        "increment",
        ViewElement::new("a", attributes([("href", Some("/increment"))]), "+1").with_events(
            Events::new().with_click(ClickMessageData::link(Message::Increment)),
        ),
    )?;
    controls.try_insert(
        "reset",
        ViewElement::new("button", Attributes::new(), "reset").with_events(
            Events::new().with_click(ClickMessageData::new(Message::Reset).stopping_propagation()),
        ),
    )?;
    controls.try_insert(
        "label",
        ViewElement::from(tags::input_text(&CommonAttributes::id("label"), &model.label))
            .with_events(Events::input(Message::Rename)),
    )?;

    let mut children = KeyedChildren::new();
    children.try_insert(
        "value",
        ViewElement::new("h1", Attributes::new(), format!("{}: {}", model.label, model.count)),
    )?;
    children.try_insert("controls", ViewElement::new("div", Attributes::new(), controls))?;
    Ok(View::new(options, children))
}
