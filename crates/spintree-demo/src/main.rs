#![forbid(unsafe_code)]

//! spintree demo: a fake build pipeline rendered as a spinner tree.
//!
//! Shows frame timing at different intervals, the downward completion
//! cascade, and a finished branch being reopened by a late subtask.
//!
//! # Running
//!
//! ```sh
//! cargo run -p spintree-demo
//! ```

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use spintree::{ProcessContext, Spinner, charset};

const REFRESH: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let ctx = Arc::new(ProcessContext::new(REFRESH));

    let root = Spinner::new(charset::DOTS, Duration::from_millis(100));
    root.bind(&ctx)
        .set_suffix(" building project")
        .set_completion("✔ project built");

    let deps = root.add_child(charset::LINE, Duration::from_millis(200));
    deps.set_suffix(" resolving dependencies")
        .set_completion("✔ dependencies resolved");

    let compile = root.add_child(charset::DOTS, Duration::from_millis(100));
    compile.set_suffix(" compiling").set_completion("✔ compiled");

    let codegen = compile.add_child(charset::ARC, Duration::from_millis(150));
    codegen.set_suffix(" codegen").set_completion("✔ codegen done");

    let mut stdout = io::stdout();
    write!(stdout, "\x1b[?25l")?; // hide cursor
    let mut prev_lines = 0;

    for tick in 0..80u32 {
        if prev_lines > 0 {
            // Move back to the top of the previous snapshot and overwrite it.
            write!(stdout, "\x1b[{prev_lines}A")?;
        }
        let frame = root.render();
        for line in frame.lines() {
            writeln!(stdout, "\x1b[2K{line}")?;
        }
        prev_lines = frame.lines().count();
        stdout.flush()?;

        match tick {
            20 => deps.mark_done(),
            35 => codegen.mark_done(),
            45 => compile.mark_done(),
            55 => {
                // A straggler reopens the finished compile branch.
                let lint = compile.add_child(charset::LINE, Duration::from_millis(100));
                lint.set_suffix(" lint (late)").set_completion("✔ lint clean");
            }
            70 => root.mark_done(),
            _ => {}
        }
        thread::sleep(REFRESH);
    }

    write!(stdout, "\x1b[?25h")?; // show cursor
    stdout.flush()
}
