use std::io::{self, BufRead, Write};

use console::EXIT_SENTINEL;

/// Front ends the user can pick at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interface {
    Console,
    Graphical,
}

impl Interface {
    pub const ALL: [Interface; 2] = [Interface::Console, Interface::Graphical];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Interface::Console => "1",
            Interface::Graphical => "2",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Interface::Console => "Console",
            Interface::Graphical => "Graphical",
        }
    }

    fn from_choice(choice: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interface| interface.key() == choice)
    }
}

/// Ask until the user names a known interface.
///
/// Returns `None` on `EXIT` or end of input.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn prompt_interface(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<Interface>> {
    loop {
        writeln!(output, "Choose an interface:")?;
        for interface in Interface::ALL {
            writeln!(output, "{} - {}", interface.key(), interface.label())?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();
        if choice == EXIT_SENTINEL {
            return Ok(None);
        }
        if let Some(interface) = Interface::from_choice(choice) {
            return Ok(Some(interface));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(script: &str) -> (Option<Interface>, String) {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let choice = prompt_interface(&mut input, &mut output).unwrap();
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn loops_until_valid_choice() {
        let (choice, output) = prompt("9\nconsole\n2\n");
        assert_eq!(choice, Some(Interface::Graphical));
        assert_eq!(output.matches("Choose an interface:").count(), 3);
        assert!(output.contains("1 - Console\n2 - Graphical\n"));
    }

    #[test]
    fn accepts_padded_choice() {
        assert_eq!(prompt(" 1 \n").0, Some(Interface::Console));
    }

    #[test]
    fn exit_and_end_of_input_quit() {
        assert_eq!(prompt("EXIT\n2\n").0, None);
        assert_eq!(prompt("").0, None);
    }
}
