//! Terminal prompts shared across commands

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
pub fn input(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Ask a yes/no question; only `y`/`yes` counts as yes.
pub fn confirm(prompt: &str) -> bool {
    let answer = match input(&format!("{prompt} (y/N): ")) {
        Ok(answer) => answer.to_lowercase(),
        Err(_) => return false,
    };

    matches!(answer.as_str(), "y" | "yes")
}
