//! End-to-end tree scenarios: mixed done/working snapshots, branch reopening,
//! and multi-thread mutation racing render.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use spintree::{ProcessContext, Spinner, charset};

fn ctx(ms: u64) -> Arc<ProcessContext> {
    Arc::new(ProcessContext::new(Duration::from_millis(ms)))
}

#[test]
fn build_tick_finish_full_run() {
    let ctx = ctx(100);
    let root = Spinner::new(&["1", "2"], Duration::from_millis(100));
    root.bind(&ctx).set_suffix(" build").set_completion("build ok");

    let compile = root.add_child(&["a", "b"], Duration::from_millis(200));
    compile.set_suffix(" compile").set_completion("compile ok");
    let link = root.add_child(&["x"], Duration::from_millis(100));
    link.set_suffix(" link").set_completion("link ok");

    assert_eq!(root.render(), "1 build\n├─a compile\n└─x link\n");
    // Root advances every tick, compile every second tick.
    assert_eq!(root.render(), "2 build\n├─a compile\n└─x link\n");
    assert_eq!(root.render(), "1 build\n├─b compile\n└─x link\n");

    compile.mark_done();
    assert_eq!(root.render(), "2 build\n├─compile ok\n└─x link\n");

    root.mark_done();
    assert_eq!(root.render(), "build ok\n├─compile ok\n└─link ok\n");
}

#[test]
fn reopening_a_finished_branch_redraws_it_animated() {
    let ctx = ctx(50);
    let root = Spinner::new(&["r"], Duration::from_millis(50));
    root.bind(&ctx).set_completion("all done");
    let tests = root.add_child(&["t"], Duration::from_millis(50));
    tests.set_completion("tests ok");
    root.mark_done();
    assert_eq!(root.render(), "all done\n└─tests ok\n");

    // A straggler subtask arrives after the branch finished.
    let retry = tests.add_child(&["?"], Duration::from_millis(50));
    retry.set_suffix(" flaky retry");
    assert_eq!(root.render(), "r\n└─t\n  └─? flaky retry\n");
}

#[test]
fn deep_chain_indentation() {
    let root = Spinner::new(&["0"], Duration::from_millis(100));
    let a = root.add_child(&["1"], Duration::from_millis(100));
    let b = a.add_child(&["2"], Duration::from_millis(100));
    let c = b.add_child(&["3"], Duration::from_millis(100));
    assert_eq!(c.depth(), 3);
    assert_eq!(root.render(), "0\n└─1\n  └─2\n    └─3\n");
}

#[test]
fn preset_charsets_render() {
    let root = Spinner::new(charset::DOTS, Duration::from_millis(80));
    root.add_child(charset::LINE, Duration::from_millis(80));
    root.add_child(charset::ARC, Duration::from_millis(80));
    // Unbound, so every node sits on frame 0.
    assert_eq!(root.render(), "⠋\n├─|\n└─◜\n");
}

#[test]
fn concurrent_mutation_never_panics_render() {
    let ctx = ctx(10);
    let root = Spinner::new(&["a", "b", "c"], Duration::from_millis(10));
    root.bind(&ctx);
    let branch = root.add_child(&["x", "y"], Duration::from_millis(20));

    let render_root = Arc::clone(&root);
    let renderer = thread::spawn(move || {
        for _ in 0..500 {
            let out = render_root.render();
            assert!(out.ends_with('\n'));
        }
    });

    let deco_branch = Arc::clone(&branch);
    let decorator = thread::spawn(move || {
        for i in 0..500 {
            deco_branch
                .set_prefix(format!("{i} "))
                .set_suffix(" working")
                .set_completion(format!("done after {i}"));
            if i % 50 == 0 {
                deco_branch.reverse_frames();
            }
        }
    });

    let grow_root = Arc::clone(&root);
    let grower = thread::spawn(move || {
        for _ in 0..20 {
            let child = grow_root.add_child(&["+"], Duration::from_millis(10));
            child.mark_done();
        }
    });

    let flip_branch = Arc::clone(&branch);
    let flipper = thread::spawn(move || {
        for _ in 0..200 {
            flip_branch.mark_done();
            flip_branch.resume();
        }
    });

    renderer.join().unwrap();
    decorator.join().unwrap();
    grower.join().unwrap();
    flipper.join().unwrap();

    // Tree settled: 21 children under the root, all renderable.
    branch.resume();
    let out = root.render();
    assert_eq!(out.lines().count(), 22);
}
