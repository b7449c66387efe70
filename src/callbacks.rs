//! # Handler Registry
//!
//! [`NmeaParser`] decodes one line at a time and hands the result to exactly one
//! registered handler: the handler of the decoded sentence type, or the failure handler.

use std::fmt;

use crate::{
    ChecksumMode, Config, LineEndingMode, ParseOutcome, dispatch,
    nmea_content::{Gga, Gll, Gsa, Gsv, NmeaSentence, Rmc, Vtg},
};

/// A boxed handler for values of type `T`.
pub type Handler<'a, T> = Box<dyn FnMut(T) + 'a>;

/// Handler for lines that could not be decoded.
pub type FailureHandler<'a> = Box<dyn FnMut(&str) + 'a>;

struct Callbacks<'a> {
    gga: Handler<'a, Gga>,
    gll: Handler<'a, Gll>,
    gsa: Handler<'a, Gsa>,
    gsv: Handler<'a, Gsv>,
    rmc: Handler<'a, Rmc>,
    vtg: Handler<'a, Vtg>,
    failure: FailureHandler<'a>,
}

impl Default for Callbacks<'_> {
    fn default() -> Self {
        Callbacks {
            gga: Box::new(|_| {}),
            gll: Box::new(|_| {}),
            gsa: Box::new(|_| {}),
            gsv: Box::new(|_| {}),
            rmc: Box::new(|_| {}),
            vtg: Box::new(|_| {}),
            failure: Box::new(|_| {}),
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// A sentence record that has its own handler slot in [`NmeaParser`].
///
/// Implemented for [`Gga`], [`Gll`], [`Gsa`], [`Gsv`], [`Rmc`] and [`Vtg`]. The trait is
/// sealed; it only exists so that [`NmeaParser::set_handler`] can pick the slot from the
/// handler's argument type.
pub trait SentenceRecord: private::Sealed + Sized {
    #[doc(hidden)]
    fn slot<'p, 'a>(parser: &'p mut NmeaParser<'a>) -> &'p mut Handler<'a, Self>;
}

macro_rules! sentence_record {
    ($($record:ident => $slot:ident),* $(,)?) => {
        $(
            impl private::Sealed for $record {}

            impl SentenceRecord for $record {
                fn slot<'p, 'a>(parser: &'p mut NmeaParser<'a>) -> &'p mut Handler<'a, Self> {
                    &mut parser.callbacks.$slot
                }
            }
        )*
    };
}

sentence_record! {
    Gga => gga,
    Gll => gll,
    Gsa => gsa,
    Gsv => gsv,
    Rmc => rmc,
    Vtg => vtg,
}

/// Decodes NMEA 0183 lines and routes each result to a registered handler.
///
/// Every slot starts out as a no-op, so lines of a type nobody listens to are silently
/// dropped. Registering a handler replaces the previous one for that type.
///
/// Handlers may borrow state from the caller for the lifetime `'a` of the parser.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
///
/// use nmea0183_router::{NmeaParser, nmea_content::Gga};
///
/// let satellites = Cell::new(0);
/// let failures = Cell::new(0);
///
/// let mut parser = NmeaParser::new();
/// parser.set_handler(|gga: Gga| satellites.set(gga.satellites_tracked));
/// parser.set_failure_handler(|_line| failures.set(failures.get() + 1));
///
/// parser.parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n");
/// parser.parse("$GPGGA,bad,data*00");
///
/// assert_eq!(satellites.get(), 8);
/// assert_eq!(failures.get(), 1);
/// ```
pub struct NmeaParser<'a> {
    config: Config,
    callbacks: Callbacks<'a>,
}

impl<'a> NmeaParser<'a> {
    /// Creates a parser with the default [`Config`] and no-op handlers.
    pub fn new() -> Self {
        NmeaParser::with_config(Config::default())
    }

    /// Creates a parser with the given framing configuration and no-op handlers.
    pub fn with_config(config: Config) -> Self {
        NmeaParser {
            config,
            callbacks: Callbacks::default(),
        }
    }

    /// Starts building a parser with non-default settings.
    pub fn builder() -> NmeaParserBuilder {
        NmeaParserBuilder::new()
    }

    /// The framing configuration in use.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Registers the handler for sentences of type `T`, replacing the previous one.
    ///
    /// The slot is selected by the handler's argument type:
    ///
    /// ```rust
    /// use nmea0183_router::{NmeaParser, nmea_content::{Gsa, Vtg}};
    ///
    /// let mut parser = NmeaParser::new();
    /// parser.set_handler(|gsa: Gsa| println!("{} satellites used", gsa.satellites.len()));
    /// parser.set_handler::<Vtg>(|vtg| println!("{} km/h", vtg.ground_speed_kmph));
    /// ```
    pub fn set_handler<T: SentenceRecord>(&mut self, handler: impl FnMut(T) + 'a) {
        *T::slot(self) = Box::new(handler);
    }

    /// Registers the handler for lines that could not be decoded, replacing the previous
    /// one.
    ///
    /// The handler receives the line exactly as it was submitted.
    pub fn set_failure_handler(&mut self, handler: impl FnMut(&str) + 'a) {
        self.callbacks.failure = Box::new(handler);
    }

    /// Decodes one line and invokes exactly one handler with the result.
    ///
    /// Decode failures never surface here; they go to the failure handler. Use
    /// [`dispatch`](crate::dispatch) to get the outcome as a value instead.
    pub fn parse(&mut self, line: &str) {
        match dispatch(line, self.config) {
            ParseOutcome::Decoded(sentence) => match sentence {
                NmeaSentence::Gga(gga) => (self.callbacks.gga)(gga),
                NmeaSentence::Gll(gll) => (self.callbacks.gll)(gll),
                NmeaSentence::Gsa(gsa) => (self.callbacks.gsa)(gsa),
                NmeaSentence::Gsv(gsv) => (self.callbacks.gsv)(gsv),
                NmeaSentence::Rmc(rmc) => (self.callbacks.rmc)(rmc),
                NmeaSentence::Vtg(vtg) => (self.callbacks.vtg)(vtg),
            },
            ParseOutcome::Failed(line) => (self.callbacks.failure)(line),
        }
    }
}

impl Default for NmeaParser<'_> {
    fn default() -> Self {
        NmeaParser::new()
    }
}

impl fmt::Debug for NmeaParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NmeaParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Configures an [`NmeaParser`] before any handler is registered.
///
/// It uses the builder pattern to allow for flexible configuration of the parser settings.
///
/// # Examples
///
/// ```rust
/// use nmea0183_router::{ChecksumMode, LineEndingMode, NmeaParserBuilder};
///
/// // Strict: checksum verified and CRLF required
/// let parser = NmeaParserBuilder::new()
///     .checksum_mode(ChecksumMode::Verify)
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
///
/// assert_eq!(parser.config().checksum_mode, ChecksumMode::Verify);
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct NmeaParserBuilder {
    /// Checksum mode for the parser.
    checksum_mode: ChecksumMode,

    /// Line ending mode for the parser.
    line_ending_mode: LineEndingMode,
}

impl NmeaParserBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Extract`]
    /// - Line ending mode: [`LineEndingMode::Optional`]
    pub fn new() -> Self {
        NmeaParserBuilder {
            checksum_mode: ChecksumMode::Extract,
            line_ending_mode: LineEndingMode::Optional,
        }
    }

    /// Sets the checksum mode for the parser.
    ///
    /// # Arguments
    ///
    /// * `mode` - The desired checksum mode:
    ///   - [`ChecksumMode::Extract`]: Checksum digits are stored, never compared
    ///   - [`ChecksumMode::Verify`]: Checksum must match the sentence body
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode for the parser.
    ///
    /// # Arguments
    ///
    /// * `mode` - The desired line ending mode:
    ///   - [`LineEndingMode::Optional`]: `\r`, `\n` and `\r\n` are stripped when present
    ///   - [`LineEndingMode::Required`]: Line must end with `\r\n`
    ///   - [`LineEndingMode::Forbidden`]: Line must not contain `\r` or `\n`
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the parser with the configured settings and no-op handlers.
    pub fn build<'a>(self) -> NmeaParser<'a> {
        NmeaParser::with_config(Config {
            checksum_mode: self.checksum_mode,
            line_ending_mode: self.line_ending_mode,
        })
    }
}
