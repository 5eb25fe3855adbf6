// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    thinking = { Event::Thinking, "philosopher:thinking" },
    hungry = { Event::Hungry, "philosopher:hungry" },
    picked_up = { Event::PickedUp { fork: ForkId(1), side: Side::Left }, "fork:picked_up" },
    dining = { Event::Dining { waited: Duration::ZERO }, "philosopher:dining" },
    put_down = { Event::PutDown { fork: ForkId(1), side: Side::Right }, "fork:put_down" },
    stopped = { Event::Stopped { meals: 3 }, "philosopher:stopped" },
)]
fn event_names(event: Event, expected: &str) {
    assert_eq!(event.name(), expected);
}

#[test]
fn describe_mentions_side_and_fork() {
    let line = Event::PickedUp {
        fork: ForkId(4),
        side: Side::Left,
    }
    .describe(PhilosopherId(3));
    assert_eq!(line, "Philosopher 3 picked up left fork 4.");
}

#[test]
fn describe_dining_reports_wait_in_millis() {
    let line = Event::Dining {
        waited: Duration::from_millis(42),
    }
    .describe(PhilosopherId(1));
    assert_eq!(line, "Philosopher 1 starts eating (waited 42 ms).");
}

#[test]
fn console_sink_writes_one_line_per_event() {
    let sink = ConsoleSink::new(Vec::new());
    sink.emit(PhilosopherId(2), &Event::Thinking);
    sink.emit(PhilosopherId(2), &Event::Hungry);

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        output,
        "Philosopher 2 is thinking...\nPhilosopher 2 is hungry.\n"
    );
}

#[test]
fn recording_sink_numbers_events_in_order() {
    let sink = RecordingSink::new();
    sink.emit(PhilosopherId(1), &Event::Thinking);
    sink.emit(PhilosopherId(2), &Event::Thinking);
    sink.emit(PhilosopherId(1), &Event::Hungry);

    let records = sink.records();
    let sequences: Vec<u64> = records.iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    assert_eq!(
        sink.events_for(PhilosopherId(1)),
        vec![Event::Thinking, Event::Hungry]
    );
}

#[test]
fn null_sink_accepts_events() {
    NullSink.emit(PhilosopherId(1), &Event::Stopped { meals: 0 });
}

#[test]
fn events_serialize_with_type_tag() {
    let json = serde_json::to_value(Event::PutDown {
        fork: ForkId(2),
        side: Side::Right,
    })
    .unwrap();
    assert_eq!(json["type"], "put_down");
    assert_eq!(json["side"], "right");
    assert_eq!(json["fork"], 2);
}
