// crates/segmenter-cli/tests/split_files.rs

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use segmenter_cli::cmd::split::{execute, PolicyKind, SplitArgs};
use tempfile::TempDir;

const LEADS_UTF8: &str = "\
Nombre,Ciudad,Saldo
José Núñez,Querétaro,1200
María Peña,León,
Raúl Gómez,Mérida,350.5
";

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
}

fn write_input(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, bytes).expect("write input");
    p
}

fn args(input: PathBuf, out_dir: PathBuf, policy: PolicyKind, max_rows: usize) -> SplitArgs {
    SplitArgs {
        campaign: "BanCoppel".into(),
        agents: vec!["Natalia Vega".into(), "Arturo Cuevas".into()],
        r#in: input,
        out_dir,
        policy,
        max_rows,
        date: None,
        dry_run: false,
        no_manifest: false,
    }
}

#[test]
fn capped_split_writes_files_and_manifest() {
    let tmp = TempDir::new().expect("tempdir");
    let input = write_input(tmp.path(), "leads.csv", LEADS_UTF8.as_bytes());
    let out = tmp.path().join("out");

    let rep = execute(&args(input, out.clone(), PolicyKind::Capped, 2), day()).expect("split");

    assert_eq!(rep.summaries.len(), 2);
    assert_eq!(rep.total_rows, 3);

    let first = out.join("2025_02_14_detonaciones_bancoppel_natalia_vega_s1.csv");
    let second = out.join("2025_02_14_detonaciones_bancoppel_arturo_cuevas_s2.csv");
    assert_eq!(rep.files, vec![first.clone(), second.clone()]);

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        "Nombre,Ciudad,Saldo\nJose Nunez,Queretaro,1200\nMaria Pena,Leon,\n"
    );
    assert_eq!(
        std::fs::read_to_string(&second).unwrap(),
        "Nombre,Ciudad,Saldo\nRaul Gomez,Merida,350.5\n"
    );

    let manifest = std::fs::read_to_string(rep.manifest.expect("manifest")).unwrap();
    assert_eq!(manifest.lines().count(), 3);
    assert!(manifest.contains("2025_02_14_detonaciones_bancoppel_arturo_cuevas_s2.csv"));
}

#[test]
fn equal_split_reads_latin1_input() {
    let tmp = TempDir::new().expect("tempdir");
    let latin1 = b"Nombre,Ciudad\nJos\xE9,Le\xF3n\nAna,Puebla\nLuis,Toluca\n";
    let input = write_input(tmp.path(), "leads.csv", latin1);
    let out = tmp.path().join("out");

    let mut a = args(input, out.clone(), PolicyKind::Equal, 1);
    a.date = Some(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
    a.no_manifest = true;

    let rep = execute(&a, day()).expect("split");
    assert!(rep.manifest.is_none());
    assert_eq!(
        rep.summaries,
        [
            "Segmento 1 para Natalia Vega con 2 filas y 2 columnas",
            "Segmento 2 para Arturo Cuevas con 1 filas y 2 columnas",
        ]
    );

    let first = out.join("2023_07_01_detonaciones_bancoppel_natalia_vega_s1.csv");
    assert_eq!(
        std::fs::read_to_string(first).unwrap(),
        "Nombre,Ciudad\nJose,Leon\nAna,Puebla\n"
    );
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().expect("tempdir");
    let input = write_input(tmp.path(), "leads.csv", LEADS_UTF8.as_bytes());
    let out = tmp.path().join("out");

    let mut a = args(input, out.clone(), PolicyKind::Capped, 1);
    a.dry_run = true;

    let rep = execute(&a, day()).expect("split");
    assert_eq!(rep.summaries.len(), 3);
    assert!(rep.files.is_empty());
    assert!(rep.run_id.is_some());
    assert!(!out.exists());
}

#[test]
fn rejects_bad_inputs() {
    let tmp = TempDir::new().expect("tempdir");
    let out = tmp.path().join("out");

    let empty = write_input(tmp.path(), "empty.csv", b"");
    assert!(execute(&args(empty, out.clone(), PolicyKind::Capped, 10), day()).is_err());

    let header_only = write_input(tmp.path(), "header.csv", b"Nombre,Ciudad\n");
    assert!(execute(&args(header_only, out.clone(), PolicyKind::Capped, 10), day()).is_err());

    let xlsx = write_input(tmp.path(), "leads.xlsx", b"PK\x03\x04");
    assert!(execute(&args(xlsx, out.clone(), PolicyKind::Capped, 10), day()).is_err());

    let ok = write_input(tmp.path(), "leads.csv", LEADS_UTF8.as_bytes());
    assert!(execute(&args(ok.clone(), out.clone(), PolicyKind::Capped, 0), day()).is_err());

    let mut foreign = args(ok.clone(), out.clone(), PolicyKind::Equal, 10);
    foreign.agents = vec!["Jose Rangel".into()];
    assert!(execute(&foreign, day()).is_err());

    let mut repeated = args(ok, out.clone(), PolicyKind::Equal, 10);
    repeated.agents = vec!["Natalia Vega".into(), "natalia vega".into()];
    assert!(execute(&repeated, day()).is_err());

    assert!(!out.exists());
}
