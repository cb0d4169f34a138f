use std::io::{BufRead, Write};
use crate::core::library::LibraryResult;

// Console pairs the line reader and the writer of one interactive session.
pub(crate) struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn say(&mut self, line: &str) -> LibraryResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    pub fn say_all(&mut self, lines: &[String]) -> LibraryResult<()> {
        for line in lines {
            self.say(line.as_str())?;
        }
        Ok(())
    }

    // prints the prompt and reads one trimmed line, None once input is exhausted
    pub fn ask(&mut self, prompt: &str) -> LibraryResult<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::console::prompt::Console;

    #[test]
    fn test_should_ask_and_trim() {
        let mut console = Console::new(Cursor::new("  Dune \n"), Vec::new());
        assert_eq!(Some("Dune".to_string()), console.ask("Enter title: ").expect("should read"));
        assert_eq!(None, console.ask("Enter title: ").expect("should read"));
        let out = String::from_utf8(console.into_writer()).expect("should be utf8");
        assert_eq!("Enter title: Enter title: ", out.as_str());
    }

    #[test]
    fn test_should_say_lines() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say_all(&["one".to_string(), "two".to_string()]).expect("should write");
        let out = String::from_utf8(console.into_writer()).expect("should be utf8");
        assert_eq!("one\ntwo\n", out.as_str());
    }
}
