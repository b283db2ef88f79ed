use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use recon::{radix,
            ss,
            task::Task,
            Rational,
};
use rug::{rand::RandState, Integer};

const TESTCASE2: &str = include_str!("../tasks/testcase2.json");

pub fn decode_benchmark(c: &mut Criterion) {
    macro_rules! decode_bench {
        ($name:literal, $digits:expr, $base:expr) => {
            c.bench_function($name, |b| {
                b.iter(|| radix::decode($digits, $base));
            });
        }
    }
    decode_bench!("decode base 2" , "101010101001100101011100000001000111010010111101100100010", 2 );
    decode_bench!("decode base 6" , "30140555423010311322515333"                               , 6 );
    decode_bench!("decode base 15", "a3c97ed550c69484"                                         , 15);
}

pub fn rational_benchmark(c: &mut Criterion) {
    let p = Rational::new(Integer::from(271644355478965u64), Integer::from(5040)).unwrap();
    let q = Rational::new(-Integer::from(86628991292533394985u128), Integer::from(720)).unwrap();
    c.bench_function("Rational add", |b| {
        b.iter(|| p.add(&q));
    });
    c.bench_function("Rational mul", |b| {
        b.iter(|| p.mul(&q));
    });
}

pub fn reconstruct_benchmark(c: &mut Criterion) {
    let task = Task::from_json_str(TESTCASE2).unwrap();
    c.bench_function("Reconstruct k = 7", |b| {
        b.iter(|| task.reconstruct());
    });

    let mut rand = RandState::new();
    let mut rng = rand::thread_rng();
    let seed: u64 = rng.gen();
    rand.seed(&Integer::from(seed));
    let mut group = c.benchmark_group("Reconstruct generated");
    group.sample_size(20);
    for &(k, n) in &[(8usize, 16usize), (32, 64)] {
        let task = ss::gen_shares(&Integer::from(seed), k, n, &mut rand).unwrap();
        let bench_id = format!("Reconstruct {} of {}", k, n);
        group.bench_function(bench_id, |b| {
            b.iter(|| task.reconstruct());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    decode_benchmark,
    rational_benchmark,
    reconstruct_benchmark,
);
criterion_main!(benches);
