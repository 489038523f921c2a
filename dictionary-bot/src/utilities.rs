use std::io::{self, Write};

use dictionary::Command;

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// The known command most similar to a mistyped one, if any is close enough.
pub fn closest_command(typed: &str) -> Option<Command> {
    let typed = typed.to_lowercase();
    Command::ALL
        .into_iter()
        .map(|command| (command, strsim::jaro(command.name(), &typed)))
        .filter(|(_, similarity)| *similarity > 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(command, _)| command)
}
