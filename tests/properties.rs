//! Property tests from spec §8, quantified over randomly generated normal
//! values (teacher's `base`/`integer` crates pull in `rand` as a
//! dev-dependency for exactly this kind of randomized coverage).

use bigfloat::{FBig, Rounding};
use rand::Rng;

const PRECISION: usize = 40;

fn random_value(rng: &mut impl Rng) -> FBig {
    let mantissa: f64 = rng.gen_range(-1.0e6..1.0e6);
    FBig::from_f64(mantissa, PRECISION, Rounding::Nearest)
}

fn random_nonzero(rng: &mut impl Rng) -> FBig {
    loop {
        let v = random_value(rng);
        if !v.is_zero() {
            return v;
        }
    }
}

fn random_positive(rng: &mut impl Rng) -> FBig {
    random_nonzero(rng).abs()
}

fn ulp_close(a: &FBig, b: &FBig, tolerance: f64) -> bool {
    (a.to_f64() - b.to_f64()).abs() <= tolerance * a.to_f64().abs().max(b.to_f64().abs()).max(1.0)
}

#[test]
fn round_trip_decimal() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let v = random_value(&mut rng);
        let s = v.to_fixed(PRECISION + 5);
        let back = FBig::from_str_with(&s, PRECISION, Rounding::Nearest);
        assert!(ulp_close(&v, &back, 1e-9));
    }
}

#[test]
fn round_trip_binary_frexp_ldexp() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let v = random_nonzero(&mut rng);
        let (mantissa, exponent) = v.frexp();
        let back = mantissa.ldexp(exponent);
        assert_eq!(v, back);
    }
}

#[test]
fn arithmetic_identities() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let a = random_nonzero(&mut rng);
        let b = random_nonzero(&mut rng);

        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.mul(&b), b.mul(&a));

        let back = a.add(&b).sub(&b);
        assert!(ulp_close(&a, &back, 1e-6));

        let recip_product = a.mul(&a.reciprocal());
        assert!(ulp_close(&recip_product, &FBig::from_i64(1, PRECISION, Rounding::Nearest), 1e-6));

        let positive_a = a.abs();
        let sqrt_sq = positive_a.sqrt().mul(&positive_a.sqrt());
        assert!(ulp_close(&sqrt_sq, &positive_a, 1e-6));
    }
}

#[test]
fn exp_ln_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a = random_positive(&mut rng);
        let back = a.ln().exp();
        assert!(ulp_close(&a, &back, 1e-4));

        let b = random_value(&mut rng);
        let back2 = b.exp().ln();
        assert!(ulp_close(&b, &back2, 1e-4));
    }
}

#[test]
fn trig_pythagorean_identity() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a = random_value(&mut rng);
        let s = a.sin();
        let c = a.cos();
        let sum = s.mul(&s).add(&c.mul(&c));
        assert!((sum.to_f64() - 1.0).abs() < 1e-4);

        let sh = a.sinh();
        let ch = a.cosh();
        let identity = ch.mul(&ch).sub(&sh.mul(&sh));
        assert!((identity.to_f64() - 1.0).abs() < 1e-4);

        if c.to_f64().abs() > 1e-3 {
            let lhs = a.tan().mul(&c);
            assert!(ulp_close(&lhs, &s, 1e-3));
        }
    }
}

#[test]
fn monotonicity_exp_sqrt() {
    let mut rng = rand::thread_rng();
    let mut values: Vec<FBig> = (0..30).map(|_| random_value(&mut rng)).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for pair in values.windows(2) {
        assert!(pair[0].exp().less_equal(&pair[1].exp()));
    }

    let mut positives: Vec<FBig> = (0..30).map(|_| random_positive(&mut rng)).collect();
    positives.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for pair in positives.windows(2) {
        assert!(pair[0].sqrt().less_equal(&pair[1].sqrt()));
    }
}

#[test]
fn symmetry_trig() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let x = random_nonzero(&mut rng);
        assert!(ulp_close(&x.neg().sin(), &x.sin().neg(), 1e-6));
        assert!(ulp_close(&x.neg().cos(), &x.cos(), 1e-6));

        let y = random_nonzero(&mut rng);
        let lhs = y.atan2(&x);
        let rhs = y.neg().atan2(&x).neg();
        assert!(ulp_close(&lhs, &rhs, 1e-6));
    }
}

#[test]
fn rounding_determinism() {
    let v1 = FBig::from_str_with("1.23456789", PRECISION, Rounding::Nearest);
    let v2 = FBig::from_str_with("1.23456789", PRECISION, Rounding::Nearest);
    assert_eq!(v1, v2);
    assert_eq!(v1.to_string_decimal(), v2.to_string_decimal());
}

#[test]
fn special_value_contagion() {
    let nan = FBig::nan(PRECISION, Rounding::Nearest);
    let finite = FBig::from_i64(5, PRECISION, Rounding::Nearest);
    assert!(nan.add(&finite).is_nan());
    assert!(finite.mul(&nan).is_nan());

    let inf = FBig::infinity(PRECISION, Rounding::Nearest, dashu_base::Sign::Positive);
    let r = inf.add(&finite);
    assert!(r.is_infinite());

    let zero = FBig::zero(PRECISION, Rounding::Nearest, dashu_base::Sign::Positive);
    assert!(zero.mul(&inf).is_nan());
    assert!(inf.sub(&inf).is_nan());
    assert!(FBig::from_i64(1, PRECISION, Rounding::Nearest).div(&zero).is_infinite());
    let recip = FBig::from_i64(1, PRECISION, Rounding::Nearest).div(&inf);
    assert!(recip.is_zero());
}

#[test]
fn precision_monotonicity() {
    let mut rng = rand::thread_rng();
    for _ in 0..30 {
        let raw: f64 = rng.gen_range(-1000.0..1000.0);
        let low = FBig::from_f64(raw, 20, Rounding::Nearest);
        let high = FBig::from_f64(raw, 40, Rounding::Nearest);
        let low_str = low.to_string_decimal();
        let high_str = high.to_string_decimal();
        let low_sig: String = low_str.chars().filter(|c| c.is_ascii_digit()).take(21).collect();
        let high_sig: String = high_str.chars().filter(|c| c.is_ascii_digit()).take(21).collect();
        assert!(
            low_sig == high_sig || ulp_close(&low, &high, 1e-18),
            "precision monotonicity violated for {raw}"
        );
    }
}
