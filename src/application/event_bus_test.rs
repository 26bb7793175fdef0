use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn recorder() -> (Arc<Mutex<Vec<String>>>, EventBus<String>) {
    (Arc::new(Mutex::new(Vec::new())), EventBus::new())
}

#[test]
fn test_publish_without_listeners() {
    let bus: EventBus<u32> = EventBus::new();
    assert_eq!(bus.publish(&7), 0);
}

#[test]
fn test_listeners_run_in_subscription_order() {
    let (seen, bus) = recorder();

    for name in ["first", "second", "third"] {
        let seen = Arc::clone(&seen);
        bus.subscribe(move |event: &String| {
            seen.lock().unwrap().push(format!("{name}:{event}"));
        });
    }

    assert_eq!(bus.publish(&"ping".to_string()), 3);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["first:ping", "second:ping", "third:ping"]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let calls = Arc::new(AtomicUsize::new(0));
    let bus: EventBus<()> = EventBus::new();

    let counter = Arc::clone(&calls);
    let id = bus.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    bus.publish(&());
    assert!(bus.unsubscribe(id));
    bus.publish(&());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn test_unsubscribe_unknown_id() {
    let bus: EventBus<()> = EventBus::new();
    let id = bus.subscribe(|_| {});
    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
}

#[test]
fn test_subscribe_during_publish_applies_to_next_publish() {
    let calls = Arc::new(AtomicUsize::new(0));
    let bus: EventBus<()> = EventBus::new();

    let inner_bus = bus.clone();
    let counter = Arc::clone(&calls);
    bus.subscribe(move |_| {
        let counter = Arc::clone(&counter);
        inner_bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    });

    assert_eq!(bus.publish(&()), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(bus.publish(&()), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clones_share_listeners() {
    let bus: EventBus<()> = EventBus::new();
    let other = bus.clone();
    other.subscribe(|_| {});
    assert_eq!(bus.listener_count(), 1);
}
