//! Session reuse and isolation.

use pretty_assertions::assert_eq;
use sheqc::{run_source, Config, Session};

#[test]
fn a_session_runs_several_programs() {
    let session = Session::new(&Config::default());
    assert_eq!(session.evaluate("{+ 1 2}").unwrap(), b"3");
    assert_eq!(session.evaluate("{strlen \"four\"}").unwrap(), b"4");
    assert_eq!(session.evaluate("{error 1}").unwrap_err().category(), "user");
    assert_eq!(session.evaluate("true").unwrap(), b"true");
}

#[test]
fn each_run_gets_a_fresh_arena() {
    let config = Config {
        arena_capacity: 4096,
    };
    let session = Session::new(&config);
    for _ in 0..10_000 {
        assert_eq!(session.evaluate("{{lambda (x) : x} 1}").unwrap(), b"1");
    }
}

#[test]
fn a_failed_run_does_not_affect_the_next() {
    let session = Session::new(&Config {
        arena_capacity: 8 * 1024,
    });
    let runaway = session
        .evaluate("{let {[f = {lambda (f) : {f f}}]} in {f f} end}")
        .unwrap_err();
    assert_eq!(runaway.category(), "resource-exhaustion");
    assert_eq!(session.evaluate("{* 6 7}").unwrap(), b"42");
}

#[test]
fn session_matches_one_shot_runs() {
    let config = Config::default();
    let session = Session::new(&config);
    for source in ["{+ 1 2}", "\"s\"", "{lambda () : 1}", "{substring \"abc\" 1 2}"] {
        assert_eq!(session.evaluate(source), run_source(source, &config));
    }
}

#[test]
fn sessions_on_separate_threads() {
    let programs: Vec<(String, String)> = (0..8)
        .map(|n| (format!("{{* {n} {{+ {n} 1}}}}"), (n * (n + 1)).to_string()))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = programs
            .iter()
            .map(|(source, _)| {
                scope.spawn(move || Session::new(&Config::default()).evaluate(source))
            })
            .collect();
        for (handle, (_, expected)) in handles.into_iter().zip(&programs) {
            assert_eq!(handle.join().unwrap().unwrap(), expected.as_bytes());
        }
    });
}
