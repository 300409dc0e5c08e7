//! Codec configuration.

use std::fmt;
use std::sync::Arc;

use crate::Lookup;

/// Width of the tag-6 float payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatWidth {
    /// 4-byte payload. Halves float size at the cost of narrowing every
    /// value through `f32`; matches historical streams.
    F32,
    /// 8-byte payload, bit-exact for any `f64`. Canonical.
    #[default]
    F64,
}

/// How tag-7 string payloads are framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringMode {
    /// Varint scalar count followed by that many scalars. Canonical;
    /// embedded U+0000 round-trips.
    #[default]
    LengthPrefixed,
    /// Legacy framing: scalars followed by a zero terminator. Cannot carry
    /// U+0000; encoding one is an `UnsupportedValue` error.
    NullTerminated,
}

/// Diagnostic callback fired when an object key has no lookup-table match.
pub type LookupMissFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Immutable configuration bound to an encoder or decoder at construction.
///
/// The defaults are the canonical strict protocol. Every permissive flag is
/// a named compatibility escape hatch for reproducing historical
/// non-conformant streams and must be opted into explicitly.
#[derive(Clone)]
pub struct OabOptions {
    /// Shared key-compression table. Absent means keys are always inlined.
    pub lookup: Option<Arc<Lookup>>,
    /// Width of float payloads.
    pub float_width: FloatWidth,
    /// String framing mode.
    pub string_mode: StringMode,
    /// Fired on every fallback-to-inline key encoding. Diagnostic only, no
    /// wire effect.
    pub on_lookup_miss: Option<LookupMissFn>,
    /// Admit NaN and ±Infinity through the extended tags 10-12 instead of
    /// rejecting them.
    pub allow_non_finite: bool,
    /// `false` substitutes `Undefined` for unrecognized tag bytes.
    pub fail_on_unknown_tag: bool,
    /// `false` substitutes defaults when the input ends early, producing
    /// garbage data by design.
    pub fail_on_buffer_underrun: bool,
    /// `false` substitutes U+FFFD for unrecognized UTF-8 leading bytes.
    pub fail_on_malformed_utf8: bool,
    /// `false` substitutes the historical `"undefined"` key for
    /// out-of-range lookup indices.
    pub fail_on_lookup_out_of_range: bool,
}

impl Default for OabOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl OabOptions {
    /// Canonical strict configuration with no lookup table.
    pub fn new() -> Self {
        Self {
            lookup: None,
            float_width: FloatWidth::default(),
            string_mode: StringMode::default(),
            on_lookup_miss: None,
            allow_non_finite: false,
            fail_on_unknown_tag: true,
            fail_on_buffer_underrun: true,
            fail_on_malformed_utf8: true,
            fail_on_lookup_out_of_range: true,
        }
    }

    /// Attaches a shared key-lookup table.
    pub fn with_lookup(mut self, lookup: Arc<Lookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Selects the float payload width.
    pub fn with_float_width(mut self, width: FloatWidth) -> Self {
        self.float_width = width;
        self
    }

    /// Selects the string framing mode.
    pub fn with_string_mode(mut self, mode: StringMode) -> Self {
        self.string_mode = mode;
        self
    }

    /// Installs the lookup-miss diagnostic callback.
    pub fn with_on_lookup_miss(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_lookup_miss = Some(Arc::new(f));
        self
    }

    /// Opts into the extended non-finite float tags.
    pub fn with_allow_non_finite(mut self, allow: bool) -> Self {
        self.allow_non_finite = allow;
        self
    }

    /// Strict (default) vs permissive unknown-tag handling.
    pub fn with_fail_on_unknown_tag(mut self, fail: bool) -> Self {
        self.fail_on_unknown_tag = fail;
        self
    }

    /// Strict (default) vs permissive buffer-underrun handling.
    pub fn with_fail_on_buffer_underrun(mut self, fail: bool) -> Self {
        self.fail_on_buffer_underrun = fail;
        self
    }

    /// Strict (default) vs permissive malformed-UTF-8 handling.
    pub fn with_fail_on_malformed_utf8(mut self, fail: bool) -> Self {
        self.fail_on_malformed_utf8 = fail;
        self
    }

    /// Strict (default) vs permissive out-of-range lookup handling.
    pub fn with_fail_on_lookup_out_of_range(mut self, fail: bool) -> Self {
        self.fail_on_lookup_out_of_range = fail;
        self
    }
}

impl fmt::Debug for OabOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OabOptions")
            .field("lookup", &self.lookup)
            .field("float_width", &self.float_width)
            .field("string_mode", &self.string_mode)
            .field("on_lookup_miss", &self.on_lookup_miss.as_ref().map(|_| ".."))
            .field("allow_non_finite", &self.allow_non_finite)
            .field("fail_on_unknown_tag", &self.fail_on_unknown_tag)
            .field("fail_on_buffer_underrun", &self.fail_on_buffer_underrun)
            .field("fail_on_malformed_utf8", &self.fail_on_malformed_utf8)
            .field(
                "fail_on_lookup_out_of_range",
                &self.fail_on_lookup_out_of_range,
            )
            .finish()
    }
}
