use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_enter: bool,
}

impl TerminalOps for RecordingOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

#[test]
fn guard_leaves_screen_mode_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_runs_once_across_clones() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();
    let other = restorer.clone();

    assert!(!other.is_restored());
    restorer.restore().unwrap();
    other.restore().unwrap();
    assert!(other.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_yields_no_guard() {
    let ops = Arc::new(RecordingOps {
        fail_enter: true,
        ..Default::default()
    });

    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(&*ops.calls.lock().unwrap(), &["enter"]);
}

#[test]
fn quit_flag_starts_lowered() {
    let flag = install_quit_flag().unwrap();
    assert!(!flag.load(Ordering::SeqCst));
}
