use criterion::Criterion;
use rand::{rngs::StdRng, SeedableRng};
use rsa_bignum::{BigNumber, Config, Divisor};

fn benchmark_multiply(c: &mut Criterion, digits: usize) {
    let mut rng = StdRng::seed_from_u64(0);
    for (name, config) in [("schoolbook", Config::SCHOOLBOOK), ("karatsuba", Config::FAST)] {
        c.bench_function(&format!("{}_mul_{}", name, digits), |b| {
            b.iter_with_setup(
                || (BigNumber::random(&mut rng, digits), BigNumber::random(&mut rng, digits)),
                |(x, y)| {
                    criterion::black_box(x.mul_with(&y, &config));
                },
            );
        });
    }
}

fn benchmark_divide(c: &mut Criterion, digits: usize) {
    let mut rng = StdRng::seed_from_u64(0);
    let divisor = &BigNumber::random(&mut rng, digits) + &(BigNumber::one(1) << (digits - 1));

    c.bench_function(&format!("schoolbook_div_{}", digits), |b| {
        b.iter_with_setup(
            || BigNumber::random(&mut rng, 2 * digits),
            |x| {
                criterion::black_box(x.schoolbook_div_rem(&divisor).unwrap());
            },
        );
    });

    // refine once up front, then measure the cached reciprocal
    let mut newton = Divisor::with_config(&divisor, Config::FAST).unwrap();
    newton.div_rem(&BigNumber::random(&mut rng, 2 * digits));
    c.bench_function(&format!("newton_div_{}", digits), |b| {
        b.iter_with_setup(
            || BigNumber::random(&mut rng, 2 * digits),
            |x| {
                criterion::black_box(newton.div_rem(&x));
            },
        );
    });
}

fn benchmark_powmod(c: &mut Criterion, digits: usize) {
    let mut rng = StdRng::seed_from_u64(0);
    let modulus = &BigNumber::random(&mut rng, digits) + &(BigNumber::one(1) << (digits - 1));
    let exponent = BigNumber::from(0x10001u64);

    for (name, config) in [("schoolbook", Config::SCHOOLBOOK), ("fast", Config::FAST)] {
        c.bench_function(&format!("{}_powmod_{}", name, digits), |b| {
            b.iter_with_setup(
                || BigNumber::random(&mut rng, digits - 1),
                |x| {
                    criterion::black_box(x.powmod_with(&exponent, &modulus, &config).unwrap());
                },
            );
        });
    }
}

fn main() {
    let mut criterion = Criterion::default()
        .configure_from_args()
        .sample_size(20);

    benchmark_multiply(&mut criterion, 32);
    benchmark_multiply(&mut criterion, 128);
    benchmark_multiply(&mut criterion, 512);

    benchmark_divide(&mut criterion, 64);
    benchmark_divide(&mut criterion, 256);

    benchmark_powmod(&mut criterion, 64);
    benchmark_powmod(&mut criterion, 128);

    criterion.final_summary();
}
