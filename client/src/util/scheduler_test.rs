use super::*;
use std::cell::Cell;
use std::rc::Rc;

use timeline::Playback;

#[test]
fn server_side_schedule_never_runs_the_job() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    let task = BrowserScheduler.schedule(Duration::ZERO, Box::new(move || flag.set(true)));
    task.cancel();
    assert!(!ran.get());
}

#[test]
fn playback_accepts_browser_tasks() {
    let mut playback = Playback::idle();
    playback.push(BrowserScheduler.schedule(Duration::from_millis(5), Box::new(|| {})));
    assert_eq!(playback.len(), 1);
    playback.cancel();
    assert!(playback.is_empty());
}
