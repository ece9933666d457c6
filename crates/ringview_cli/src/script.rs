//! Interaction scripts
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! wait 3          # let the intro finish
//! focus 2
//! wait 1.5
//! drag 40 0       # dropped, the gate is closed
//! back
//! wait 2
//! zoom 0.5
//! ```

use anyhow::{bail, Context, Result};
use std::fmt;

/// A single scripted interaction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptStep {
    /// Tick for this many seconds
    Wait(f32),
    /// Request focus on an object
    Focus(usize),
    /// Trigger back
    Back,
    /// One frame of pointer drag with the rotate button held
    Drag(f32, f32),
    /// One frame of scroll
    Zoom(f32),
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Wait(seconds) => write!(f, "wait {seconds}"),
            ScriptStep::Focus(index) => write!(f, "focus {index}"),
            ScriptStep::Back => write!(f, "back"),
            ScriptStep::Drag(dx, dy) => write!(f, "drag {dx} {dy}"),
            ScriptStep::Zoom(delta) => write!(f, "zoom {delta}"),
        }
    }
}

/// Parse a whole script
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (number, line) in source.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: '{}'", number + 1, line))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<ScriptStep> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    let args: Vec<&str> = words.collect();

    let step = match (command, args.as_slice()) {
        ("wait", [seconds]) => {
            let seconds: f32 = seconds.parse().context("wait expects seconds")?;
            if !(seconds.is_finite() && seconds >= 0.0) {
                bail!("wait expects a non-negative duration");
            }
            ScriptStep::Wait(seconds)
        }
        ("focus", [index]) => ScriptStep::Focus(index.parse().context("focus expects an index")?),
        ("back", []) => ScriptStep::Back,
        ("drag", [dx, dy]) => ScriptStep::Drag(
            dx.parse().context("drag expects two numbers")?,
            dy.parse().context("drag expects two numbers")?,
        ),
        ("zoom", [delta]) => ScriptStep::Zoom(delta.parse().context("zoom expects a number")?),
        ("wait" | "focus" | "back" | "drag" | "zoom", _) => {
            bail!("wrong number of arguments for '{command}'")
        }
        _ => bail!("unknown command '{command}'"),
    };
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let steps = parse_script(
            "# tour\nwait 3\nfocus 2\n\ndrag 40 -5  # ignored while focused\nzoom 0.5\nback\n",
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Wait(3.0),
                ScriptStep::Focus(2),
                ScriptStep::Drag(40.0, -5.0),
                ScriptStep::Zoom(0.5),
                ScriptStep::Back,
            ]
        );
    }

    #[test]
    fn test_errors_carry_line_number() {
        let err = parse_script("wait 1\nspin 3\n").unwrap_err();
        assert!(err.to_string().starts_with("line 2"));
        assert!(format!("{err:#}").contains("unknown command 'spin'"));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        for bad in ["wait", "wait -1", "focus x", "focus -1", "back now", "drag 1", "zoom"] {
            assert!(parse_script(bad).is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn test_display_parses_back() {
        let step = ScriptStep::Drag(1.5, -2.0);
        assert_eq!(parse_script(&step.to_string()).unwrap(), vec![step]);
    }
}
