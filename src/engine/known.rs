use crate::complex::{Complex, math};

/// Signature of a known one-argument function.
pub type UnaryFn = fn(Complex) -> Complex;
/// Signature of a known two-argument function.
pub type BinaryFn = fn(Complex, Complex) -> Complex;

/// One named entry of a known table.
struct Known<T: 'static> {
    name:  &'static str,
    value: T,
}

/// Defines a static lookup table together with the public list of its names.
///
/// Each entry maps a terminal to a value of the table's type.
macro_rules! known_table {
    (
        $table:ident, $names:ident: $ty:ty {
            $( $name:literal => $value:expr ),* $(,)?
        }
    ) => {
        static $table: &[Known<$ty>] = &[
            $(
                Known { name: $name, value: $value },
            )*
        ];
        #[doc = concat!("Every terminal listed in `", stringify!($table), "`.")]
        pub const $names: &[&str] = &[
            $($name,)*
        ];
    };
}

known_table! {
    CONSTANT_TABLE, KNOWN_CONSTANTS: Complex {
        "e"  => math::E,
        "i"  => math::I,
        "pi" => math::PI,
    }
}

known_table! {
    UNARY_TABLE, UNARY_FUNCTIONS: UnaryFn {
        "abs"      => Complex::abs,
        "arccos"   => Complex::acos,
        "arccosh"  => Complex::acosh,
        "arccot"   => Complex::acot,
        "arccoth"  => Complex::acoth,
        "arccsc"   => Complex::acsc,
        "arccsch"  => Complex::acsch,
        "arcsec"   => Complex::asec,
        "arcsech"  => Complex::asech,
        "arcsin"   => Complex::asin,
        "arcsinh"  => Complex::asinh,
        "arctan"   => Complex::atan,
        "arctanh"  => Complex::atanh,
        "arg"      => Complex::arg,
        "ceil"     => Complex::ceil,
        "conj"     => Complex::conj,
        "cos"      => Complex::cos,
        "cosh"     => Complex::cosh,
        "cot"      => Complex::cot,
        "coth"     => Complex::coth,
        "csc"      => Complex::csc,
        "csch"     => Complex::csch,
        "exp"      => Complex::exp,
        "floor"    => Complex::floor,
        "frac"     => Complex::frac,
        "imag"     => Complex::im,
        "\u{2111}" => Complex::im,
        "log10"    => Complex::log10,
        "lg"       => Complex::log2,
        "ln"       => Complex::ln,
        "-"        => Complex::negate,
        "nint"     => Complex::nint,
        "norm"     => Complex::norm,
        "real"     => Complex::re,
        "\u{211C}" => Complex::re,
        "sec"      => Complex::sec,
        "sech"     => Complex::sech,
        "sin"      => Complex::sin,
        "sinh"     => Complex::sinh,
        "sqrt"     => Complex::sqrt,
        "tan"      => Complex::tan,
        "tanh"     => Complex::tanh,
    }
}

known_table! {
    BINARY_TABLE, BINARY_FUNCTIONS: BinaryFn {
        "log" => |base, u| u.log(base),
        "mod" => Complex::modulo,
        "pow" => Complex::pow,
        "+"   => |u, v| u + v,
        "-"   => |u, v| u - v,
        "*"   => |u, v| u * v,
        "/"   => |u, v| u / v,
    }
}

/// A pair of circumfix glyphs.
///
/// Brackets other than parentheses imply a unary function applied to their
/// contents: `⌊x⌋` is `floor(x)`, `⌈x⌉` is `ceil(x)` and `[x]` is `nint(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circumfix {
    /// The opening glyph.
    pub open:     &'static str,
    /// The matching closing glyph.
    pub close:    &'static str,
    /// The unary function implied by the pair, if any.
    pub function: Option<&'static str>,
}

static CIRCUMFIX_TABLE: &[Circumfix] = &[Circumfix { open:     "(",
                                                     close:    ")",
                                                     function: None, },
                                         Circumfix { open:     "\u{230A}",
                                                     close:    "\u{230B}",
                                                     function: Some("floor"), },
                                         Circumfix { open:     "\u{2308}",
                                                     close:    "\u{2309}",
                                                     function: Some("ceil"), },
                                         Circumfix { open:     "[",
                                                     close:    "]",
                                                     function: Some("nint"), }];

/// Looks up a known constant by name.
///
/// # Example
/// ```
/// use complexpr::{Complex, engine::known};
/// assert_eq!(known::constant("i"), Some(Complex::new(0.0, 1.0)));
/// assert_eq!(known::constant("x"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<Complex> {
    CONSTANT_TABLE.iter().find(|k| k.name == name).map(|k| k.value)
}

/// Looks up a known unary function by name.
#[must_use]
pub fn unary_function(name: &str) -> Option<UnaryFn> {
    UNARY_TABLE.iter().find(|k| k.name == name).map(|k| k.value)
}

/// Looks up a known binary function by name.
#[must_use]
pub fn binary_function(name: &str) -> Option<BinaryFn> {
    BINARY_TABLE.iter().find(|k| k.name == name).map(|k| k.value)
}

/// Looks up a circumfix pair by its opening glyph.
#[must_use]
pub fn circumfix(open: &str) -> Option<&'static Circumfix> {
    CIRCUMFIX_TABLE.iter().find(|c| c.open == open)
}

/// Whether `close` is the closing glyph paired with `open`.
///
/// # Example
/// ```
/// use complexpr::engine::known;
/// assert!(known::brackets_match("[", "]"));
/// assert!(!known::brackets_match("[", ")"));
/// ```
#[must_use]
pub fn brackets_match(open: &str, close: &str) -> bool {
    circumfix(open).is_some_and(|c| c.close == close)
}
