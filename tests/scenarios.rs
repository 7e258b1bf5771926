//! Concrete end-to-end scenarios from spec §8's literal table, at precision
//! 50, NEAREST rounding.

use bigfloat::{FBig, Rounding};

fn p(s: &str) -> FBig {
    FBig::from_str_with(s, 50, Rounding::Nearest)
}

#[test]
fn scenario_1_pi_literal_round_trip_format() {
    let pi_literal = "3.141592653589793238462643383279502884197169399375105820974944";
    let v = p(pi_literal);
    assert!(v
        .to_string_decimal()
        .starts_with("3.1415926535897932384626433832795028841971693993751e+0"));
}

#[test]
fn scenario_2_point_one_plus_point_two() {
    let sum = p("0.1").add(&p("0.2"));
    assert_eq!(
        sum.to_fixed(50),
        "0.30000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn scenario_3_sqrt_two_squared_minus_two() {
    let two = p("2");
    let root = two.sqrt();
    let diff = root.mul(&root).sub(&two).abs();
    let bound = FBig::from_str_with("1e-49", 50, Rounding::Nearest);
    assert!(diff.less(&bound));
}

#[test]
fn scenario_4_exp_one_equals_e() {
    let one = p("1");
    let e50 = FBig::e_const(50, Rounding::Nearest);
    let diff = one.exp().sub(&e50).abs();
    assert!(diff.to_f64() < 1e-40);
}

#[test]
fn scenario_5_sin_of_pi_over_six() {
    let pi60 = FBig::pi_const(60, Rounding::Nearest);
    let six = FBig::from_str_with("6", 60, Rounding::Nearest);
    let angle = pi60.div(&six);
    let s = angle.sin();
    let half = p("0.5");
    assert!(s.sub(&half).abs().to_f64() < 1e-40);
}

#[test]
fn scenario_6_two_to_the_hundred() {
    let v = p("2").pow(&p("100"));
    assert!(v.to_string_decimal().starts_with("1.26765060022822940149670320537"));
}
