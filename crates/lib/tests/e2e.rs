use eyre::Context;
use glob::glob;
use purge_lib::{execute, write_csv, PurgeConfig};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

fn sibling(debit: &Path, suffix: &str) -> PathBuf {
    let name = debit.file_name().unwrap().to_str().unwrap();
    debit.with_file_name(name.replace(".debit.csv", suffix))
}

fn render(rows: &[purge_lib::StringRecord]) -> String {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf, b',').unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn run_test_files() {
    let mut inputs = glob("tests/test-cases/*.debit.csv")
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    inputs.sort();
    assert!(!inputs.is_empty());

    for debit in inputs.iter() {
        let credit = sibling(debit, ".credit.csv");
        let expected_debit = std::fs::read_to_string(sibling(debit, ".debit.expected.csv")).unwrap();
        let expected_credit =
            std::fs::read_to_string(sibling(debit, ".credit.expected.csv")).unwrap();
        let expected_log = std::fs::read_to_string(sibling(debit, ".log.expected.csv")).unwrap();

        let output = execute(
            BufReader::new(File::open(debit).unwrap()),
            BufReader::new(File::open(&credit).unwrap()),
            PurgeConfig::default().with_reference_length(8),
            b',',
        )
        .with_context(|| format!("Failed to purge {debit:?} against {credit:?}"))
        .unwrap();

        let mut log = Vec::new();
        output.transcript.write_csv(&mut log, b',').unwrap();

        assert_eq!(
            render(&output.debit),
            expected_debit,
            "residual debit of {debit:?} didn't match"
        );
        assert_eq!(
            render(&output.credit),
            expected_credit,
            "residual credit of {credit:?} didn't match"
        );
        assert_eq!(
            String::from_utf8(log).unwrap(),
            expected_log,
            "transcript of {debit:?} didn't match"
        );
        assert_eq!(
            output.summary.total(),
            2 * output.transcript.pairs().count()
        );
    }
}

#[test]
fn residuals_are_stable() {
    for debit in glob("tests/test-cases/*.debit.csv").unwrap() {
        let debit = debit.unwrap();
        let credit = sibling(&debit, ".credit.csv");
        let config = PurgeConfig::default().with_reference_length(8);
        let first = execute(
            File::open(&debit).unwrap(),
            File::open(&credit).unwrap(),
            config.clone(),
            b',',
        )
        .unwrap();
        let second = purge_lib::purge(first.debit.clone(), first.credit.clone(), config).unwrap();

        assert_eq!(second.summary.total(), 0, "{debit:?} purged twice");
        assert_eq!((second.debit, second.credit), (first.debit, first.credit));
    }
}
