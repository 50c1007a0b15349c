use std::fmt::{self, Display};
use std::io::{self, Write};

use passgen::Secret;

const DIVIDER_WIDTH: usize = 50;

/// Write the password between two divider lines, along with its length.
pub fn display_password(password: &Secret, mut output: impl Write) -> io::Result<()> {
    writeln!(&mut output, "{}", Divider(DIVIDER_WIDTH))?;
    writeln!(
        &mut output,
        "Password ({} characters): {}",
        password.char_count(),
        console::style(password.as_str()).bold()
    )?;
    writeln!(&mut output, "{}", Divider(DIVIDER_WIDTH))?;
    output.flush()
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "-")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_layout() {
        console::set_colors_enabled(false);
        let password = Secret::from("aB3$".to_owned());
        let mut out = Vec::new();
        display_password(&password, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(50));
        assert_eq!(lines[1], "Password (4 characters): aB3$");
        assert_eq!(lines[2], lines[0]);
    }
}
