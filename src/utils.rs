use std::io::{self, Write};

pub fn write_line(writer: &mut dyn Write, content: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")
}

pub fn write_error(writer: &mut dyn Write, message: &str) -> io::Result<()> {
    write_line(writer, &format!("Error: {}", message))
}
