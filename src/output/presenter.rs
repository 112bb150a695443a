use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "Result: {}", env.op)?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut *w, &env.result).map_err(to_io)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

/// Where envelopes are written. Stderr keeps stdout a single JSON document when results stream there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_env(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope, sink: Sink) -> io::Result<()> {
        match sink {
            Sink::Stdout => self.emit_to(env, &mut io::stdout().lock()),
            Sink::Stderr => self.emit_to(env, &mut io::stderr().lock()),
        }
    }

    fn emit_to(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        self.presenter.emit(env, w)?;
        w.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Envelope {
        Envelope::result("enumerate", &json!({"sites": 2}), None).unwrap()
    }

    #[test]
    fn json_presenter_writes_one_line() {
        let mut buf = Vec::new();
        JsonPresenter { pretty: false }.emit(&sample(), &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
        assert_eq!(v["result"]["sites"], 2);
    }

    #[test]
    fn emitter_follows_configured_format() {
        let mut buf = Vec::new();
        let text = Emitter::from_env(OutputConfig { format: OutputFormat::Text, pretty: false });
        text.emit_to(&sample(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Result: enumerate\n");
    }

    #[test]
    fn text_presenter_names_the_op() {
        let mut buf = Vec::new();
        TextPresenter { pretty: false }.emit(&sample(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Result: enumerate\n");
    }
}
