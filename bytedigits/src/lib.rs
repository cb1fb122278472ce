use clap::Parser;
use std::fmt;
use std::io::BufRead;
use std::io::Write;
use tracing::debug;
use tracing::info;
pub const LITERAL: &str = "1234832057328974389573489573489573489750319849032848923758324";
#[derive(Debug)]
pub enum Error {
    Digits(digits::Error),
    Io(std::io::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Digits(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "io: {}", e),
        }
    }
}
impl std::error::Error for Error {}
impl From<digits::Error> for Error {
    fn from(e: digits::Error) -> Error {
        Error::Digits(e)
    }
}
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Integers to encode, decimal or 0x-prefixed hexadecimal
    #[clap(
        env = "BYTEDIGITS_VALUES",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub values: Vec<String>,

    /// Read newline-separated integers from stdin
    #[clap(long, env = "BYTEDIGITS_STDIN")]
    pub stdin: bool,

    /// Log the big-endian byte digits of each value
    #[clap(long, env = "BYTEDIGITS_DIGITS")]
    pub digits: bool,

    /// Log path to source file
    #[clap(short, long, env = "BYTEDIGITS_DEBUG")]
    pub debug: bool,

    /// Disable tracing_subscriber timestamps
    #[clap(long, env = "BYTEDIGITS_WITHOUT_TIME")]
    pub without_time: bool,
}
/// Positional values first, then stdin lines. Falls back to [`LITERAL`] when both are empty.
pub fn inputs(args: &Args, reader: impl BufRead) -> Result<Vec<String>, Error> {
    let mut inputs = args.values.clone();
    if args.stdin {
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                inputs.push(line);
            }
        }
    }
    if inputs.is_empty() {
        inputs.push(LITERAL.to_string());
    }
    Ok(inputs)
}
pub fn run(args: &Args, reader: impl BufRead, writer: &mut impl Write) -> Result<(), Error> {
    for input in inputs(args, reader)? {
        let n = digits::from_str(&input)?;
        if args.digits {
            let be_digits = n
                .to_biguint()
                .map(|n| digits::to_be_digits(&n))
                .unwrap_or_default();
            info!(%n, digits = ?be_digits);
        }
        let output = digits::encode_signed(&n);
        debug!(%n, output);
        writeln!(writer, "{}", output)?;
    }
    Ok(())
}
