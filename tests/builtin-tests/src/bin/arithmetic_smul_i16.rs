use builtin_tests::{first_smul_i16_mismatch, SMUL_I16_CASES};

fn main() {
    match first_smul_i16_mismatch(SMUL_I16_CASES) {
        None => std::process::exit(0),
        Some(row) => {
            eprintln!("smul_i16 mismatch at {:?}", SMUL_I16_CASES[row]);
            std::process::exit(-1);
        }
    }
}
