use afl::fuzz;
use jutil::{
    fi_company_org_id_generator_with_rng, fi_ssn_generator_with_rng, iban_generator_with_rng,
    iban_validator, FiSsnGeneratorConfig, IdentifierKind, Validator,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

/// Input is `<value>,<seed bytes>`
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn all_kinds() -> Vec<IdentifierKind> {
    vec![
        IdentifierKind::Phone,
        IdentifierKind::Email,
        IdentifierKind::Passport,
        IdentifierKind::CountryCode,
        IdentifierKind::Bic,
        IdentifierKind::Iban,
        IdentifierKind::CountryIban {
            country: "FI".to_string(),
        },
        IdentifierKind::FiSsn,
        IdentifierKind::SeSsn,
        IdentifierKind::FiCompanyOrgId,
        IdentifierKind::CountryCompanyOrgId {
            country: "SE".to_string(),
        },
        IdentifierKind::FiPaymentReference,
        IdentifierKind::IsoPaymentReference,
    ]
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    for kind in all_kinds() {
        let filtered = kind.filter(input);
        assert_eq!(kind.filter(&filtered), filtered, "{:?} {:?}", kind, input);
        // must not panic on arbitrary input
        kind.is_valid_match(input);
        kind.is_valid_match(&filtered);
    }

    let iban = iban_generator_with_rng(&mut rng, None).unwrap();
    assert!(iban_validator(&iban).is_ok(), "{}", iban);

    let min_year = rng.gen_range(1800..2100);
    let max_year = rng.gen_range(min_year..2100);
    let config = FiSsnGeneratorConfig::new()
        .min_year(min_year)
        .max_year(max_year);
    let ssn = fi_ssn_generator_with_rng(&mut rng, &config).unwrap();
    assert!(IdentifierKind::FiSsn.is_valid_match(&ssn), "{}", ssn);

    let org_id = fi_company_org_id_generator_with_rng(&mut rng);
    assert!(IdentifierKind::FiCompanyOrgId.is_valid_match(&org_id), "{}", org_id);

    #[cfg(feature = "manual_test")]
    {
        println!("Generated: {} {} {}", iban, ssn, org_id);
    }
}
