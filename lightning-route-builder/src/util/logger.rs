// Pruned copy of crate rust log, without global logger
// https://github.com/rust-lang-nursery/log #7a60286
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Log traits live here, which are called throughout the library to provide useful information for
//! debugging purposes.
//!
//! Log messages should be filtered client-side by implementing check against a given [`Record`]'s
//! [`Level`] field. Each module may have its own Logger or share one.

use core::cmp;
use core::fmt;
use core::fmt::Display;
use core::fmt::Write;
use core::ops::Deref;
use core::str::FromStr;

static LOG_LEVEL_NAMES: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// An enum representing the available verbosity levels of the logger.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Level {
	/// Designates very low priority, often extremely verbose, information
	Trace,
	/// Designates lower priority information
	Debug,
	/// Designates useful information
	Info,
	/// Designates hazardous situations
	Warn,
	/// Designates very serious errors
	Error,
}

impl PartialOrd for Level {
	#[inline]
	fn partial_cmp(&self, other: &Level) -> Option<cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Level {
	#[inline]
	fn cmp(&self, other: &Level) -> cmp::Ordering {
		(*self as usize).cmp(&(*other as usize))
	}
}

impl fmt::Display for Level {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.pad(LOG_LEVEL_NAMES[*self as usize])
	}
}

impl FromStr for Level {
	type Err = String;

	fn from_str(s: &str) -> Result<Level, String> {
		match s.to_ascii_lowercase().as_str() {
			"trace" => Ok(Level::Trace),
			"debug" => Ok(Level::Debug),
			"info" => Ok(Level::Info),
			"warn" | "warning" => Ok(Level::Warn),
			"error" => Ok(Level::Error),
			_ => Err(format!("unknown log level {}", s)),
		}
	}
}

impl Level {
	/// Returns the most verbose logging level.
	#[inline]
	pub fn max() -> Level {
		Level::Trace
	}
}

/// A Record, unit of logging output with Metadata to enable filtering
/// Module_path, file, line to inform on log's source
#[derive(Clone, Debug)]
pub struct Record<'a> {
	/// The verbosity level of the message.
	pub level: Level,
	/// The id of the payment path pertaining to the logged record. Since the path id is not
	/// repeated in the message body, include it in the log output so entries remain clear.
	pub path_id: Option<u32>,
	/// The message body.
	pub args: fmt::Arguments<'a>,
	/// The module path of the message.
	pub module_path: &'static str,
	/// The source file containing the message.
	pub file: &'static str,
	/// The line containing the message.
	pub line: u32,
}

impl<'a> Record<'a> {
	/// Returns a new Record.
	#[inline]
	pub fn new(
		level: Level, path_id: Option<u32>, args: fmt::Arguments<'a>, module_path: &'static str,
		file: &'static str, line: u32,
	) -> Record<'a> {
		Record { level, path_id, args, module_path, file, line }
	}
}

impl<'a> Display for Record<'a> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut context_formatter = SubstringFormatter::new(48, f);
		write!(&mut context_formatter, "{:<5} [{}:{}]", self.level, self.module_path, self.line)?;
		context_formatter.pad_remaining()?;

		let mut path_formatter = SubstringFormatter::new(9, f);
		if let Some(path_id) = self.path_id {
			write!(path_formatter, " path:{}", path_id)?;
		}
		path_formatter.pad_remaining()?;

		write!(f, " {}", self.args)
	}
}

// Writes only up to a certain number of unicode characters to the underlying formatter. Multi-byte
// characters are never split.
struct SubstringFormatter<'fmt: 'r, 'r> {
	remaining_chars: usize,
	fmt: &'r mut fmt::Formatter<'fmt>,
}

impl<'fmt: 'r, 'r> SubstringFormatter<'fmt, 'r> {
	fn new(length: usize, formatter: &'r mut fmt::Formatter<'fmt>) -> Self {
		debug_assert!(length <= 100);
		SubstringFormatter { remaining_chars: length, fmt: formatter }
	}

	// Pads the underlying formatter with spaces until the remaining character count.
	fn pad_remaining(&mut self) -> fmt::Result {
		// 100 spaces
		const PAD100: &str = concat!(
			"                                                  ",
			"                                                  ",
		);

		self.fmt.write_str(&PAD100[..self.remaining_chars])?;
		self.remaining_chars = 0;

		Ok(())
	}
}

impl<'fmt: 'r, 'r> Write for SubstringFormatter<'fmt, 'r> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let mut char_count = 0;
		let mut next_char_byte_pos = 0;

		// One character boundary more than fits is the byte position to stop writing at.
		for (pos, _) in s.char_indices().take(self.remaining_chars + 1) {
			char_count += 1;
			next_char_byte_pos = pos;
		}

		let at_cut_off_point = char_count == self.remaining_chars + 1;
		let split_pos = if at_cut_off_point {
			self.remaining_chars = 0;
			next_char_byte_pos
		} else {
			self.remaining_chars -= char_count;
			s.len()
		};

		self.fmt.write_str(&s[..split_pos])
	}
}

/// A trait encapsulating the operations required of a logger.
pub trait Logger {
	/// Logs the [`Record`]. Since [`Record::path_id`] is not embedded in the message body, log
	/// implementations should print it alongside the message to keep entries clear.
	fn log(&self, record: Record);
}

/// Adds relevant context to a [`Record`] before passing it to the wrapped [`Logger`].
pub struct WithContext<'a, L: Deref>
where
	L::Target: Logger,
{
	/// The logger to delegate to after adding context to the record.
	logger: &'a L,
	/// The id of the payment path pertaining to the logged record.
	path_id: Option<u32>,
}

impl<'a, L: Deref> Logger for WithContext<'a, L>
where
	L::Target: Logger,
{
	fn log(&self, mut record: Record) {
		if self.path_id.is_some() {
			record.path_id = self.path_id;
		}
		self.logger.log(record)
	}
}

impl<'a, L: Deref> WithContext<'a, L>
where
	L::Target: Logger,
{
	/// Wraps the given logger, providing additional context to any logged records.
	pub fn from(logger: &'a L, path_id: Option<u32>) -> Self {
		WithContext { logger, path_id }
	}
}

/// Wrapper for logging byte slices in hex format.
#[doc(hidden)]
pub struct DebugBytes<'a>(pub &'a [u8]);
impl<'a> core::fmt::Display for DebugBytes<'a> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
		for i in self.0 {
			write!(f, "{:02x}", i)?;
		}
		Ok(())
	}
}

/// Wrapper for logging `Iterator`s.
#[doc(hidden)]
pub struct DebugIter<T: fmt::Display, I: core::iter::Iterator<Item = T> + Clone>(pub I);
impl<T: fmt::Display, I: core::iter::Iterator<Item = T> + Clone> fmt::Display for DebugIter<T, I> {
	fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
		write!(f, "[")?;
		let mut iter = self.0.clone();
		if let Some(item) = iter.next() {
			write!(f, "{}", item)?;
		}
		for item in iter {
			write!(f, ", {}", item)?;
		}
		write!(f, "]")?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::util::logger::{Level, Logger, WithContext};
	use crate::util::test_utils::TestLogger;

	use core::str::FromStr;

	struct WrapperLog<'a> {
		logger: &'a TestLogger,
	}

	impl<'a> WrapperLog<'a> {
		fn new(logger: &'a TestLogger) -> WrapperLog<'a> {
			WrapperLog { logger }
		}

		fn call_macros(&self) {
			log_error!(self.logger, "This is an error");
			log_warn!(self.logger, "This is a warning");
			log_info!(self.logger, "This is an info");
			log_debug!(self.logger, "This is a debug");
			log_trace!(self.logger, "This is a trace");
		}
	}

	#[test]
	fn test_logging_macros() {
		let logger = TestLogger::new();
		let wrapper = WrapperLog::new(&logger);
		wrapper.call_macros();
		logger.assert_log(
			"lightning_route_builder::util::logger::tests".to_string(),
			"This is a trace".to_string(),
			1,
		);
	}

	#[test]
	fn test_logging_with_context() {
		let logger = &TestLogger::new();
		let context_logger = WithContext::from(&logger, Some(3));
		log_info!(context_logger, "This is an info");
		assert_eq!(logger.last_path_id(), Some(Some(3)));

		let no_context_logger = WithContext::from(&logger, None);
		log_info!(no_context_logger, "This is an info");
		assert_eq!(logger.last_path_id(), Some(None));
	}

	#[test]
	fn test_log_ordering() {
		assert!(Level::Error > Level::Warn);
		assert!(Level::Error >= Level::Warn);
		assert!(Level::Error >= Level::Error);
		assert!(Level::Warn > Level::Info);
		assert!(Level::Info > Level::Debug);
		assert!(Level::Debug > Level::Trace);
		assert_eq!(Level::max(), Level::Trace);
	}

	#[test]
	fn test_level_from_str() {
		assert_eq!(Level::from_str("TRACE"), Ok(Level::Trace));
		assert_eq!(Level::from_str("warning"), Ok(Level::Warn));
		assert_eq!(Level::from_str("Error"), Ok(Level::Error));
		assert!(Level::from_str("gossip").is_err());
	}

	#[test]
	fn test_record_display_pads_context() {
		let logger = &TestLogger::new();
		let context_logger = WithContext::from(&logger, Some(12));
		log_info!(context_logger, "hello");
		let line = logger.last_formatted().unwrap();
		assert!(line.starts_with("INFO  [lightning_route_builder::util::logger"));
		assert!(line.contains(" path:12 "));
		assert!(line.ends_with(" hello"));
	}
}
