//! Declarative templates for the two context line generations.
//!
//! Each [`Grammar`] is an ordered table of [`Slot`] descriptors.  A slot names
//! the field it fills, the separator that precedes its key, the shape of the
//! value it accepts, and whether it may be omitted.  The matcher compiles a
//! table into a single anchored pattern; nothing else about a generation's
//! shape lives outside these tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults::CONTEXT_MARKER;

/// The historical shapes a context line may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarGeneration {
    /// Written by daemons up to and including 8.7; no Java version or vendor.
    Legacy,
    /// Written by later daemons; records the Java version and vendor.
    Current,
}

impl GrammarGeneration {
    /// Returns the slot table for this generation.
    #[must_use]
    pub const fn grammar(self) -> &'static Grammar {
        match self {
            Self::Legacy => &LEGACY_GRAMMAR,
            Self::Current => &CURRENT_GRAMMAR,
        }
    }
}

impl fmt::Display for GrammarGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// A named field of the context line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Daemon identity.
    Uid,
    /// Java installation the daemon runs on.
    JavaHome,
    /// Java feature release.
    JavaVersion,
    /// JVM vendor.
    JavaVendor,
    /// Directory holding the daemon registry.
    DaemonRegistryDir,
    /// Operating system process id.
    Pid,
    /// Idle timeout in milliseconds.
    IdleTimeout,
    /// Scheduling priority.
    Priority,
    /// Whether the instrumentation agent was applied.
    ApplyInstrumentationAgent,
    /// Native-services mode.
    NativeServicesMode,
    /// JVM options, comma separated.
    DaemonOpts,
}

impl Field {
    /// The key the daemon prints before the field's value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Uid => "uid",
            Self::JavaHome => "javaHome",
            Self::JavaVersion => "javaVersion",
            Self::JavaVendor => "javaVendor",
            Self::DaemonRegistryDir => "daemonRegistryDir",
            Self::Pid => "pid",
            Self::IdleTimeout => "idleTimeout",
            Self::Priority => "priority",
            Self::ApplyInstrumentationAgent => "applyInstrumentationAgent",
            Self::NativeServicesMode => "nativeServicesMode",
            Self::DaemonOpts => "daemonOpts",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text that must precede a slot's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// The slot opens the field list.
    Leading,
    /// A comma that may be missing when the preceding optional slot is.
    OptionalComma,
    /// A mandatory comma.
    Comma,
}

impl Separator {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Leading => "",
            Self::OptionalComma => ",?",
            Self::Comma => ",",
        }
    }
}

/// The characters a slot value may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// No commas and no line breaks.
    Token,
    /// Anything but line breaks; the longest run that still lets the rest of
    /// the line align.
    LineValue,
    /// Anything, including line breaks; the shortest run that lets the rest
    /// of the text align.
    Lazy,
}

impl ValueShape {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Token => r"[^\n,]+",
            Self::LineValue => r"[^\n]+",
            Self::Lazy => r".+?",
        }
    }
}

/// Whether a slot must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The line does not align without the slot.
    Required,
    /// The slot, its separator, and its key may all be missing.
    Optional,
}

/// One field position within a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    field: Field,
    separator: Separator,
    shape: ValueShape,
    presence: Presence,
}

impl Slot {
    const fn required(field: Field, separator: Separator, shape: ValueShape) -> Self {
        Self {
            field,
            separator,
            shape,
            presence: Presence::Required,
        }
    }

    const fn optional(field: Field, separator: Separator, shape: ValueShape) -> Self {
        Self {
            field,
            separator,
            shape,
            presence: Presence::Optional,
        }
    }

    /// The field this slot fills.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// The separator preceding the key.
    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// The accepted value shape.
    #[must_use]
    pub const fn shape(&self) -> ValueShape {
        self.shape
    }

    /// Whether the slot may be omitted.
    #[must_use]
    pub const fn presence(&self) -> Presence {
        self.presence
    }

    /// Regex group name holding the slot value.
    pub(crate) const fn group_name(&self) -> &'static str {
        self.field.key()
    }

    fn pattern(&self) -> String {
        let body = format!(
            "{}{}=(?P<{}>{})",
            self.separator.pattern(),
            regex::escape(self.field.key()),
            self.group_name(),
            self.shape.pattern(),
        );
        match self.presence {
            Presence::Required => body,
            Presence::Optional => format!("(?:{body})?"),
        }
    }
}

/// An ordered slot table for one generation.
#[derive(Debug)]
pub struct Grammar {
    generation: GrammarGeneration,
    slots: &'static [Slot],
}

impl Grammar {
    /// The generation this grammar describes.
    #[must_use]
    pub const fn generation(&self) -> GrammarGeneration {
        self.generation
    }

    /// The slots in the order they appear on the line.
    #[must_use]
    pub const fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// Looks up the slot for `field`, if this generation has one.
    #[must_use]
    pub fn slot(&self, field: Field) -> Option<&'static Slot> {
        self.slots.iter().find(|slot| slot.field == field)
    }

    /// Renders the anchored pattern aligning a whole text with this grammar.
    ///
    /// Arbitrary text, line breaks included, may surround the bracketed
    /// field list.
    #[must_use]
    pub fn pattern(&self) -> String {
        let mut pattern = String::from(r"(?s)\A.*");
        pattern.push_str(&regex::escape(CONTEXT_MARKER));
        for slot in self.slots {
            pattern.push_str(&slot.pattern());
        }
        pattern.push_str(r"\].*\z");
        pattern
    }
}

const IDENTITY: Slot = Slot::optional(Field::Uid, Separator::Leading, ValueShape::Token);
const JAVA_HOME: Slot =
    Slot::required(Field::JavaHome, Separator::OptionalComma, ValueShape::LineValue);
const REGISTRY_DIR: Slot =
    Slot::required(Field::DaemonRegistryDir, Separator::Comma, ValueShape::LineValue);
const PID: Slot = Slot::required(Field::Pid, Separator::Comma, ValueShape::LineValue);
const IDLE_TIMEOUT: Slot = Slot::required(Field::IdleTimeout, Separator::Comma, ValueShape::Lazy);
const PRIORITY: Slot = Slot::optional(Field::Priority, Separator::Comma, ValueShape::Token);
const INSTRUMENTATION_AGENT: Slot = Slot::optional(
    Field::ApplyInstrumentationAgent,
    Separator::Comma,
    ValueShape::Token,
);
const NATIVE_SERVICES: Slot =
    Slot::optional(Field::NativeServicesMode, Separator::Comma, ValueShape::Token);
const DAEMON_OPTS: Slot =
    Slot::required(Field::DaemonOpts, Separator::Comma, ValueShape::LineValue);

/// Context lines written by daemons up to and including 8.7.
pub static LEGACY_GRAMMAR: Grammar = Grammar {
    generation: GrammarGeneration::Legacy,
    slots: &[
        IDENTITY,
        JAVA_HOME,
        REGISTRY_DIR,
        PID,
        IDLE_TIMEOUT,
        PRIORITY,
        INSTRUMENTATION_AGENT,
        NATIVE_SERVICES,
        DAEMON_OPTS,
    ],
};

/// Context lines written by daemons after 8.7.
pub static CURRENT_GRAMMAR: Grammar = Grammar {
    generation: GrammarGeneration::Current,
    slots: &[
        IDENTITY,
        JAVA_HOME,
        Slot::required(Field::JavaVersion, Separator::Comma, ValueShape::LineValue),
        Slot::required(Field::JavaVendor, Separator::Comma, ValueShape::LineValue),
        REGISTRY_DIR,
        PID,
        IDLE_TIMEOUT,
        PRIORITY,
        INSTRUMENTATION_AGENT,
        NATIVE_SERVICES,
        DAEMON_OPTS,
    ],
};
