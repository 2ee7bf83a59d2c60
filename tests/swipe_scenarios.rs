//! End-to-end swipe scenarios driven through the public tracker API

use std::cell::RefCell;
use std::rc::Rc;

use swipe_gesture::gesture::{Contact, Disposition, SwipeEvent, SwipeTracker};
use swipe_gesture::input::{
    ContactSample, InputCollector, PointerEvent, PointerKind, Rect, ReleaseSurface, Surface,
    SurfaceId,
};

type Log = Rc<RefCell<Vec<(SwipeEvent, Contact)>>>;

fn surface() -> Surface {
    Surface::new(SurfaceId(0), "test", Rect::new(-500.0, -500.0, 1000.0, 1000.0))
}

fn recording(tracker: &mut SwipeTracker) -> Log {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    for event in SwipeEvent::ALL {
        let log = Rc::clone(&log);
        tracker.on(event, move |contact| {
            log.borrow_mut().push((event, contact.clone()));
            Ok(())
        });
    }
    log
}

fn events(log: &Log) -> Vec<SwipeEvent> {
    log.borrow().iter().map(|(event, _)| *event).collect()
}

#[test]
fn test_left_swipe_with_zero_vertical_motion() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    tracker.on_contact_start([100.0, 100.0], 0.0);
    tracker.on_contact_move([40.0, 100.0], 50.0, false).unwrap();
    tracker.on_contact_end([40.0, 100.0], 100.0).unwrap();

    assert_eq!(
        events(&log),
        vec![
            SwipeEvent::Move,
            SwipeEvent::SwipeEnd,
            SwipeEvent::SwipeLeft,
            SwipeEvent::SwipeDown
        ]
    );

    let log = log.borrow();
    let moved = &log[0].1;
    assert_eq!((moved.dx, moved.dy), (-60.0, 0.0));

    let ended = &log[1].1;
    assert_eq!((ended.dx, ended.dy), (-60.0, 0.0));
    assert_eq!(ended.dt, Some(100.0));
    assert_eq!(ended.end_time, Some(100.0));
}

#[test]
fn test_up_swipe_without_moves() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    tracker.on_contact_start([0.0, 0.0], 0.0);
    let swipe = tracker.on_contact_end([0.0, -50.0], 10.0).unwrap().unwrap();

    assert_eq!(
        events(&log),
        vec![
            SwipeEvent::SwipeEnd,
            SwipeEvent::SwipeRight,
            SwipeEvent::SwipeUp
        ]
    );
    assert_eq!((swipe.contact.dx, swipe.contact.dy), (0.0, -50.0));
    assert_eq!(swipe.contact.pos(), Some([0.0, -50.0]));
}

#[test]
fn test_no_motion_is_right_and_down() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    tracker.on_contact_start([7.0, 7.0], 0.0);
    tracker.on_contact_end([7.0, 7.0], 0.0).unwrap();

    assert_eq!(
        events(&log),
        vec![
            SwipeEvent::SwipeEnd,
            SwipeEvent::SwipeRight,
            SwipeEvent::SwipeDown
        ]
    );
}

#[test]
fn test_orphan_move_and_end_emit_nothing() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    assert_eq!(
        tracker.on_contact_move([1.0, 1.0], 0.0, false).unwrap(),
        Disposition::Pass
    );
    assert!(tracker.on_contact_end([1.0, 1.0], 1.0).unwrap().is_none());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_second_start_discards_first_contact() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    tracker.on_contact_start([0.0, 0.0], 0.0);
    tracker.on_contact_move([200.0, 200.0], 5.0, false).unwrap();
    tracker.on_contact_start([300.0, 300.0], 10.0);
    tracker.on_contact_end([250.0, 350.0], 30.0).unwrap();

    let log = log.borrow();
    let ended = &log[1].1;
    assert_eq!(ended.start_pos(), [300.0, 300.0]);
    assert_eq!((ended.dx, ended.dy), (-50.0, 50.0));
    assert_eq!(ended.dt, Some(20.0));
    assert_eq!(log[2].0, SwipeEvent::SwipeLeft);
    assert_eq!(log[3].0, SwipeEvent::SwipeDown);
}

#[test]
fn test_multi_touch_move_matches_skipping_it() {
    let run = |include_multi_touch: bool| {
        let mut tracker = SwipeTracker::new(surface()).unwrap();
        let log = recording(&mut tracker);

        tracker.on_contact_start([0.0, 0.0], 0.0);
        tracker.on_contact_move([10.0, 5.0], 1.0, false).unwrap();
        if include_multi_touch {
            tracker.on_contact_move([400.0, -400.0], 2.0, true).unwrap();
        }
        tracker.on_contact_move([20.0, 15.0], 3.0, false).unwrap();
        tracker.on_contact_end([25.0, 15.0], 4.0).unwrap();

        let log = log.borrow();
        log.iter()
            .map(|(event, contact)| (*event, contact.dx, contact.dy))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(true), run(false));
}

#[test]
fn test_every_end_emits_one_of_each_axis() {
    let displacements = [
        (-30.0, -30.0),
        (-30.0, 0.0),
        (-30.0, 30.0),
        (0.0, -30.0),
        (0.0, 0.0),
        (0.0, 30.0),
        (30.0, -30.0),
        (30.0, 0.0),
        (30.0, 30.0),
    ];

    for (dx, dy) in displacements {
        let mut tracker = SwipeTracker::new(surface()).unwrap();
        let log = recording(&mut tracker);

        tracker.on_contact_start([0.0, 0.0], 0.0);
        tracker.on_contact_move([dx / 2.0, dy / 2.0], 1.0, false).unwrap();
        tracker.on_contact_end([dx, dy], 2.0).unwrap();

        let seen = events(&log);
        let end_at = seen
            .iter()
            .position(|e| *e == SwipeEvent::SwipeEnd)
            .expect("swipe-end emitted");
        let horizontal: Vec<_> = seen
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, SwipeEvent::SwipeLeft | SwipeEvent::SwipeRight))
            .collect();
        let vertical: Vec<_> = seen
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, SwipeEvent::SwipeUp | SwipeEvent::SwipeDown))
            .collect();

        assert_eq!(horizontal.len(), 1, "dx={dx} dy={dy}: {seen:?}");
        assert_eq!(vertical.len(), 1, "dx={dx} dy={dy}: {seen:?}");
        assert!(horizontal[0].0 > end_at && vertical[0].0 > end_at);

        let expected_h = if dx < 0.0 {
            SwipeEvent::SwipeLeft
        } else {
            SwipeEvent::SwipeRight
        };
        let expected_v = if dy < 0.0 {
            SwipeEvent::SwipeUp
        } else {
            SwipeEvent::SwipeDown
        };
        assert_eq!(*horizontal[0].1, expected_h);
        assert_eq!(*vertical[0].1, expected_v);
    }
}

#[test]
fn test_snapshots_are_independent() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    tracker.on_contact_start([0.0, 0.0], 0.0);
    tracker.on_contact_move([10.0, 0.0], 1.0, false).unwrap();
    tracker.on_contact_move([20.0, 0.0], 2.0, false).unwrap();

    let log = log.borrow();
    assert_eq!(log[0].1.dx, 10.0);
    assert_eq!(log[1].1.dx, 20.0);
}

#[test]
fn test_touch_swipe_through_collector() {
    let mut tracker = SwipeTracker::builder()
        .target(Surface::new(
            SurfaceId(1),
            "carousel",
            Rect::new(0.0, 0.0, 300.0, 200.0),
        ))
        .release(ReleaseSurface::Anywhere)
        .build()
        .unwrap();
    let log = recording(&mut tracker);
    let mut collector = InputCollector::new();

    let mut feed = |event: Option<PointerEvent>| {
        event
            .and_then(|e| e.to_sample())
            .map(|sample| tracker.dispatch(sample).unwrap())
    };

    feed(Some(collector.touch_started(1, [250.0, 100.0], 0.0)));
    // A second finger restarts tracking at the first finger's position
    feed(Some(collector.touch_started(2, [10.0, 10.0], 5.0)));
    assert_eq!(
        feed(collector.touch_moved(1, [150.0, 110.0], 16.0)),
        Some(Disposition::Pass)
    );
    collector.touch_cancelled(2);
    assert_eq!(
        feed(collector.touch_moved(1, [100.0, 120.0], 32.0)),
        Some(Disposition::ConsumeAndPreventDefault)
    );
    // Finger leaves the carousel before lifting
    assert_eq!(
        feed(collector.touch_ended(1, [-40.0, 120.0], 60.0)),
        Some(Disposition::Consume)
    );

    assert_eq!(
        events(&log),
        vec![
            SwipeEvent::Move,
            SwipeEvent::SwipeEnd,
            SwipeEvent::SwipeLeft,
            SwipeEvent::SwipeDown
        ]
    );
    let log = log.borrow();
    assert_eq!((log[0].1.dx, log[0].1.dy), (-150.0, 20.0));
    assert_eq!((log[1].1.dx, log[1].1.dy), (-290.0, 20.0));
    assert_eq!(log[1].1.dt, Some(55.0));
}

#[test]
fn test_touch_leaving_target_keeps_moving() {
    let mut tracker = SwipeTracker::new(Surface::new(
        SurfaceId(1),
        "carousel",
        Rect::new(0.0, 0.0, 300.0, 200.0),
    ))
    .unwrap();
    let log = recording(&mut tracker);
    let mut collector = InputCollector::new();

    let start = collector.touch_started(1, [250.0, 100.0], 0.0).to_sample().unwrap();
    assert_eq!(tracker.dispatch(start).unwrap(), Disposition::Consume);

    let moved = collector
        .touch_moved(1, [-40.0, 100.0], 16.0)
        .and_then(|e| e.to_sample())
        .unwrap();
    assert_eq!(
        tracker.dispatch(moved).unwrap(),
        Disposition::ConsumeAndPreventDefault
    );
    assert_eq!(events(&log), vec![SwipeEvent::Move]);
    assert_eq!(log.borrow()[0].1.dx, -290.0);
}

#[test]
fn test_mouse_swipe_through_dispatch() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let log = recording(&mut tracker);

    let samples = [
        ContactSample::Move {
            position: [0.0, 0.0],
            time: 0.0,
            pointer: PointerKind::Mouse,
            pointer_count: 1,
        },
        ContactSample::Start {
            position: [0.0, 0.0],
            time: 1.0,
        },
        ContactSample::Move {
            position: [0.0, 80.0],
            time: 2.0,
            pointer: PointerKind::Mouse,
            pointer_count: 1,
        },
        ContactSample::End {
            position: [5.0, 90.0],
            time: 3.0,
        },
    ];
    let dispositions: Vec<_> = samples
        .into_iter()
        .map(|sample| tracker.dispatch(sample).unwrap())
        .collect();

    assert_eq!(
        dispositions,
        vec![
            Disposition::Pass,
            Disposition::Consume,
            Disposition::ConsumeAndPreventDefault,
            Disposition::Consume
        ]
    );
    assert_eq!(
        events(&log),
        vec![
            SwipeEvent::Move,
            SwipeEvent::SwipeEnd,
            SwipeEvent::SwipeRight,
            SwipeEvent::SwipeDown
        ]
    );
}

#[test]
fn test_off_stops_delivery() {
    let mut tracker = SwipeTracker::new(surface()).unwrap();
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    let id = tracker.on(SwipeEvent::SwipeEnd, move |_| {
        *counter.borrow_mut() += 1;
        Ok(())
    });

    tracker.on_contact_start([0.0, 0.0], 0.0);
    tracker.on_contact_end([1.0, 1.0], 1.0).unwrap();
    assert!(tracker.off(SwipeEvent::SwipeEnd, id));
    tracker.on_contact_start([0.0, 0.0], 2.0);
    tracker.on_contact_end([1.0, 1.0], 3.0).unwrap();

    assert_eq!(*hits.borrow(), 1);
}
