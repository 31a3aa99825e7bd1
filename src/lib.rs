#![doc = r#"
listrun — a file-driven command interpreter over an ordered list of letters.

This crate reads a script of textual commands, parses and validates each
line, and applies it to an owned, ordered sequence of uppercase letters
(A–Z), reporting either a result line or a validation failure per command.
It powers the listrun CLI and can be embedded in your own Rust applications.

Grammar
-------
One command per line, case-sensitive:

```text
Push <LETTER>
Remove <LETTER>
Head
Tail
Length
PrintList
```

`<LETTER>` is a single A–Z character immediately followed by the line end.
`Push` prepends, so the head is always the most recently pushed letter.
Malformed lines are rejected individually; the run continues with the next
command.

Quick start: run a script from a file
-------------------------------------
```rust,no_run
use std::path::Path;

fn main() -> listrun::Result<()> {
    let report = listrun::run_script_path(Path::new("commands.txt"))?;
    for line in report.output_lines() {
        println!("{line}");
    }
    eprintln!("{} command(s) rejected", report.rejected);
    Ok(())
}
```

Run an in-memory script
-----------------------
```rust
let report = listrun::run_script_str("Push A\nPush B\nPrintList\n");
assert_eq!(report.output_lines(), vec!["B-A"]);
```

Drive the interpreter by hand
-----------------------------
```rust
use listrun::{Interpreter, Output};

let mut interpreter = Interpreter::new();
interpreter.run_line("Push A").unwrap();
assert_eq!(
    interpreter.run_line("Length").unwrap(),
    Some(Output::Length(1))
);
```

Error handling
--------------
Fallible public functions return `listrun::Result<T>`. Per-line validation
failures are not errors at this level; they appear as `Event::Rejected`
entries in the `RunReport`, carrying a typed `CommandError` (parse or
list-engine failure).

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`Letter`, `Command`, `Output`).
- [`core`] — the parser, list engine, and interpreter primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use error::{Error, Result};
pub use types::{Command, Letter, Output};

pub use core::interpreter::{CommandError, Interpreter};
pub use core::list::{EngineError, OrderedList};
pub use core::parser::{ParseError, parse_line};

// High-level API re-exports
pub use api::{Event, RunReport, run_script_path, run_script_str};
