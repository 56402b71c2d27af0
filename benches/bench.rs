use criterion::{criterion_group, criterion_main};

mod iban_benchmark {
    use criterion::Criterion;
    use jutil::{iban_bank_info, iban_validator, IbanChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let ibans = vec![
            "FI21 1234 5600 0007 85",
            "FI88 4730 4720 0175 17",
            "SE45 5000 0000 0583 9825 7466",
            "BE68 5390 0754 7034",
            "DK50 0040 0440 1162 43",
            "DE44 5001 0517 5407 3249 31",
            // invalid checksum
            "FI21 1234 5600 0007 86",
        ];

        c.bench_function("iban-checksum", |b| {
            b.iter(|| {
                for iban in ibans.iter() {
                    IbanChecksum.is_valid_match(iban);
                }
            })
        });

        c.bench_function("iban-validator", |b| {
            b.iter(|| {
                for iban in ibans.iter() {
                    let _ = iban_validator(iban);
                }
            })
        });

        c.bench_function("iban-bank-info", |b| {
            b.iter(|| {
                for iban in ibans.iter() {
                    iban_bank_info(iban);
                }
            })
        });
    }
}

mod personal_id_benchmark {
    use criterion::Criterion;
    use jutil::{fi_ssn_validator, se_ssn_validator, FinnishHetuChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let hetus = vec!["010101-0101", "111111-111C", "110305+283X", "231298-965X"];
        c.bench_function("hetu-checksum", |b| {
            b.iter(|| {
                for hetu in hetus.iter() {
                    FinnishHetuChecksum.is_valid_match(hetu);
                }
            })
        });

        c.bench_function("fi-ssn-validator", |b| {
            b.iter(|| {
                for hetu in hetus.iter() {
                    let _ = fi_ssn_validator(hetu);
                }
            })
        });

        c.bench_function("se-ssn-validator", |b| {
            b.iter(|| {
                let _ = se_ssn_validator("811218-9876");
            })
        });
    }
}

mod generator_benchmark {
    use criterion::Criterion;
    use jutil::{
        fi_company_org_id_generator_with_rng, fi_ssn_generator_with_rng,
        iban_generator_with_rng, FiSsnGeneratorConfig,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let mut rng = StdRng::seed_from_u64(0);
        let config = FiSsnGeneratorConfig::default();

        c.bench_function("iban-generator", |b| {
            b.iter(|| iban_generator_with_rng(&mut rng, None))
        });
        c.bench_function("fi-ssn-generator", |b| {
            b.iter(|| fi_ssn_generator_with_rng(&mut rng, &config))
        });
        c.bench_function("fi-company-org-id-generator", |b| {
            b.iter(|| fi_company_org_id_generator_with_rng(&mut rng))
        });
    }
}

criterion_group!(
    benches,
    iban_benchmark::criterion_benchmark,
    personal_id_benchmark::criterion_benchmark,
    generator_benchmark::criterion_benchmark
);
criterion_main!(benches);
