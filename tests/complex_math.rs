use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, LN_2, LN_10, PI};

use approx::assert_relative_eq;
use complexpr::{Complex, complex::math, error::TypeConversionError};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

fn assert_close(actual: Complex, real: f64, imaginary: f64) {
    assert_relative_eq!(actual.real, real, epsilon = 1e-12);
    assert_relative_eq!(actual.imaginary, imaginary, epsilon = 1e-12);
}

#[test]
fn constants() {
    assert_eq!(math::E, Complex::new(E, 0.0));
    assert_eq!(math::I, Complex::new(0.0, 1.0));
    assert_eq!(math::LN2, Complex::new(LN_2, 0.0));
    assert_eq!(math::LN10, Complex::new(LN_10, 0.0));
    assert_eq!(math::LOG2E, Complex::new(std::f64::consts::LOG2_E, 0.0));
    assert_eq!(math::LOG10E, Complex::new(std::f64::consts::LOG10_E, 0.0));
    assert_eq!(math::PI, Complex::new(PI, 0.0));
    assert_eq!(math::SQRT1_2, Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0));
    assert_eq!(math::SQRT2, Complex::new(std::f64::consts::SQRT_2, 0.0));
}

#[test]
fn conversions() {
    assert_eq!(Complex::from(2.5_f32), Complex::new(2.5, 0.0));
    assert_eq!(Complex::from(-4_i32), Complex::new(-4.0, 0.0));
    assert_eq!(Complex::from(7_u32), Complex::new(7.0, 0.0));
    assert_eq!(Complex::from((1.0, 2.0)), Complex::new(1.0, 2.0));
    assert_eq!(Complex::from([1.0, 2.0]), Complex::new(1.0, 2.0));

    assert_eq!(Complex::try_from(&[3.0][..]), Ok(Complex::new(3.0, 0.0)));
    assert_eq!(Complex::try_from(&[3.0, 4.0][..]), Ok(Complex::new(3.0, 4.0)));
    assert!(Complex::try_from(&[1.0, 2.0, 3.0][..]).is_err());

    assert_eq!(" 2 , -1 ".parse::<Complex>(), Ok(Complex::new(2.0, -1.0)));
    assert_eq!("x".parse::<Complex>(),
               Err(TypeConversionError { input: "x".to_string() }));
    assert!("1,2,3".parse::<Complex>().is_err());
    assert!("".parse::<Complex>().is_err());
}

#[test]
fn conversion_error_message() {
    let error = "abc".parse::<Complex>().unwrap_err();
    assert_eq!(error.to_string(), "Expected numeric type, found 'abc'");
}

#[test]
fn display() {
    assert_eq!(Complex::new(0.0, 0.0).to_string(), "0");
    assert_eq!(Complex::new(3.0, 0.0).to_string(), "3");
    assert_eq!(Complex::new(-3.0, -0.0).to_string(), "-3");
    assert_eq!(Complex::new(0.0, 2.0).to_string(), "2i");
    assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
    assert_eq!(Complex::new(0.5, 1.5).to_string(), "0.5 + 1.5i");
}

#[test]
fn real_and_imaginary_parts() {
    assert_eq!(math::real((3.0, 4.0)), Complex::new(3.0, 0.0));
    assert_eq!(math::imaginary((3.0, 4.0)), Complex::new(4.0, 0.0));
    assert_eq!(math::imaginary(5), Complex::new(0.0, 0.0));
}

#[test]
fn arithmetic() {
    assert_eq!(math::add((1.0, 2.0), (3.0, 4.0)), Complex::new(4.0, 6.0));
    assert_eq!(math::subtract((1.0, 2.0), (3.0, 4.0)), Complex::new(-2.0, -2.0));
    assert_eq!(math::multiply((1.0, 2.0), (3.0, 4.0)), Complex::new(-5.0, 10.0));
    assert_eq!(math::divide((-5.0, 10.0), (3.0, 4.0)), Complex::new(1.0, 2.0));
    assert_eq!(math::negate((1.0, -2.0)), Complex::new(-1.0, 2.0));
    assert_eq!(math::conj((1.0, 2.0)), Complex::new(1.0, -2.0));
}

#[test]
fn division_by_zero_is_not_trapped() {
    let result = math::divide((1.0, 1.0), 0);
    assert!(result.real.is_nan());
    assert!(result.imaginary.is_nan());

    let result = math::divide((1.0, 1.0), (1e-320, 0.0));
    assert!(result.real.is_infinite());
}

#[test]
fn rounding() {
    assert_eq!(math::ceil((1.2, 2.7)), Complex::new(2.0, 3.0));
    assert_eq!(math::ceil((-1.2, -2.7)), Complex::new(-1.0, -2.0));
    assert_eq!(math::floor((1.2, 2.7)), Complex::new(1.0, 2.0));
    assert_eq!(math::floor((-1.2, -2.7)), Complex::new(-2.0, -3.0));
    assert_eq!(math::nint((1.2, 2.7)), Complex::new(1.0, 3.0));
    assert_eq!(math::nint((-1.2, -2.7)), Complex::new(-1.0, -3.0));
}

#[test]
fn fractional_part_keeps_the_sign() {
    assert_close(math::frac((1.2, 2.7)), 0.2, 0.7);
    assert_close(math::frac((-1.2, -2.7)), -0.2, -0.7);
}

#[test]
fn modulus() {
    assert_eq!(math::modulo((4.0, 2.0), (3.0, 4.0)), Complex::new(0.0, 5.0));
    assert_eq!(math::modulo((4.0, 2.0), (3.0, -1.0)), Complex::new(0.0, 0.0));
    assert_eq!(math::modulo((1.0, 1.0), (3.0, -1.0)), Complex::new(1.0, 1.0));
}

#[test]
fn norm_abs_and_arg() {
    assert_eq!(math::norm((3.0, 4.0)), Complex::new(25.0, 0.0));
    assert_eq!(math::abs((3.0, 4.0)), Complex::new(5.0, 0.0));
    assert_close(math::arg((SQRT_3, 1.0)), FRAC_PI_6, 0.0);
}

#[test]
fn logarithms() {
    let u = (1.0, SQRT_3);
    assert_close(math::ln(u), LN_2, FRAC_PI_3);
    assert_close(math::log(2, u), 1.0, FRAC_PI_3 / LN_2);
    assert_close(math::log2(u), 1.0, FRAC_PI_3 / LN_2);
    assert_close(math::log10(u), LN_2 / LN_10, FRAC_PI_3 / LN_10);
}

#[test]
fn exponentials() {
    assert_close(math::exp(1), E, 0.0);
    assert_close(math::pow(math::E, (2.0, FRAC_PI_3)), E * E / 2.0, E * E * SQRT_3 / 2.0);
}

#[test]
fn square_roots() {
    assert_eq!(math::sqrt((-3.0, 4.0)), Complex::new(1.0, 2.0));
    assert_eq!(math::sqrt(4), Complex::new(2.0, 0.0));
    assert_eq!(math::sqrt((-4.0, 1.0e-300)), Complex::new(0.0, 2.0));
    assert_eq!(math::sqrt((-4.0, -1.0e-300)), Complex::new(0.0, -2.0));
}

#[test]
fn square_roots_of_negative_reals_keep_a_zero_imaginary_part() {
    let root = math::sqrt(-4);
    assert_eq!(root, Complex::new(0.0, 0.0));
    assert!(root.imaginary.is_sign_positive());

    let root = math::sqrt((-4.0, -0.0));
    assert_eq!(root, Complex::new(0.0, 0.0));
    assert!(root.imaginary.is_sign_negative());
}

#[test]
fn inverse_functions_past_the_branch_point() {
    assert_close(math::asin(2), FRAC_PI_2, -LN_2);
    assert_close(math::acos(2), 0.0, LN_2);
}

#[test]
fn circular_functions() {
    let u = (FRAC_PI_3, 1.0);
    assert_close(math::cos(u), 1.0_f64.cosh() / 2.0, -1.0_f64.sinh() * SQRT_3 / 2.0);
    assert_close(math::sin(u), 1.0_f64.cosh() * SQRT_3 / 2.0, 1.0_f64.sinh() / 2.0);
    assert_close(math::tan((FRAC_PI_4, 1.0)), 1.0 / 2.0_f64.cosh(), 2.0_f64.tanh());

    assert_close(math::sec(0), 1.0, 0.0);
    assert_close(math::csc(FRAC_PI_2), 1.0, 0.0);
    assert_close(math::cot(FRAC_PI_4), 1.0, 0.0);
}

#[test]
fn hyperbolic_functions() {
    let u = (1.0, FRAC_PI_3);
    assert_close(math::cosh(u), 1.0_f64.cosh() / 2.0, 1.0_f64.sinh() * SQRT_3 / 2.0);
    assert_close(math::sinh(u), 1.0_f64.sinh() / 2.0, 1.0_f64.cosh() * SQRT_3 / 2.0);
    assert_close(math::tanh((1.0, FRAC_PI_4)), 2.0_f64.tanh(), 1.0 / 2.0_f64.cosh());

    assert_close(math::sech(0), 1.0, 0.0);
    assert_close(math::csch(1), 1.0 / 1.0_f64.sinh(), 0.0);
    assert_close(math::coth(1), 1.0 / 1.0_f64.tanh(), 0.0);
}

#[test]
fn inverse_circular_functions() {
    let u = (1.0, 2.0);
    assert_close(math::acos(u), 1.143_717_740_402_420_5, -1.528_570_919_480_998_2);
    assert_close(math::acot(u), 0.231_823_804_500_403_06, -0.402_359_478_108_525_1);
    assert_close(math::acsc(u), 0.186_318_054_107_815_53, -0.396_568_230_112_328_98);
    assert_close(math::asec(u), 1.384_478_272_687_081_1, 0.396_568_230_112_328_98);
    assert_close(math::asin(u), 0.427_078_586_392_476_13, 1.528_570_919_480_998_2);
    assert_close(math::atan(u), 1.338_972_522_294_493_6, 0.402_359_478_108_525_1);
}

#[test]
fn inverse_hyperbolic_functions() {
    let u = (1.0, 2.0);
    assert_close(math::acosh(u), 1.528_570_919_480_998_2, 1.143_717_740_402_420_5);
    assert_close(math::acoth(u), 0.173_286_795_139_986_33, -0.392_699_081_698_724_15);
    assert_close(math::acsch(u), 0.215_612_418_555_829_64, -0.401_586_391_667_806_07);
    assert_close(math::asech(u), 0.396_568_230_112_328_98, -1.384_478_272_687_081_1);
    assert_close(math::asinh(u), 1.469_351_744_368_185_3, 1.063_440_023_577_752);
    assert_close(math::atanh(u), 0.173_286_795_139_986_33, 1.178_097_245_096_172_5);
}
