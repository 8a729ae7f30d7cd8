//! End-to-end: raw export bytes through parsing, mapping and QIF serialization.

use chrono::NaiveDate;
use fundqif_core::{ConvertError, DateFilter};
use fundqif_ingest::parse_export;
use fundqif_qif::{Labels, convert, write_qif};

const HEADER: &str =
    "Preistag;Umsatzart;Fondsname;Investmentfonds;Zusatzinformation;Anteile;Preis;Betrag;Waehrung\n";

fn run(export: &str, filter: DateFilter) -> Result<(String, usize, usize), ConvertError> {
    let inputs = parse_export(export.as_bytes())?;
    let conversion = convert(&inputs, &filter, &Labels::default())?;
    let mut out = Vec::new();
    let written = write_qif(&mut out, &conversion.records)?;
    Ok((String::from_utf8(out).unwrap(), conversion.read, written))
}

fn records(qif: &str) -> Vec<Vec<&str>> {
    qif.lines()
        .skip(1)
        .collect::<Vec<_>>()
        .split(|line| *line == "^")
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[test]
fn test_contribution_scenario() {
    let export = format!("{HEADER}01.03.2020;Beitrag;Global Fund / A;X;;10,000;5,50;55,00;EUR\n");
    let (qif, read, written) = run(&export, DateFilter::default()).unwrap();

    assert_eq!((read, written), (1, 1));
    assert_eq!(
        qif,
        "!Type:Invst\n\
         D03.01.2020\n\
         V03.01.2020\n\
         NKauf\n\
         U55.00\n\
         FEUR\n\
         I5.50\n\
         Q10.00\n\
         L|[Global Fund]\n\
         YA\n\
         ^\n"
    );
}

#[test]
fn test_custody_fee_scenario() {
    let export = format!("{HEADER}15.03.2020;Depotentgelt;Global Fund / A;X;;-0,500;24,68;-12,34;EUR\n");
    let (qif, _, _) = run(&export, DateFilter::default()).unwrap();

    let recs = records(&qif);
    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert!(rec.contains(&"NVerkauf"));
    assert!(!rec.iter().any(|line| line.starts_with('U')));
    assert!(rec.contains(&"EDepotkosten:Depotgebühren"));
    let split = rec.iter().find(|line| line.starts_with('O')).unwrap();
    assert!(split.ends_with("|12.34|0.00|0.00|0.00|0.00"));
    assert!(rec.contains(&"LKursgewinne:Realisierte Gewinne|[Global Fund]"));
    assert!(rec.contains(&"Q0.50"));
}

#[test]
fn test_mixed_export_with_filter() {
    let export = format!(
        "{HEADER}\
         01.01.2020;Beitrag;Aktien / A;X;;1,000;100,00;100,00;EUR\n\
         \n\
         01.02.2020;Umschichtung;Aktien / A;X;;-0,500;110,00;-55,00;EUR\n\
         01.02.2020;Umschichtung;Renten / B;X;;1,100;50,00;55,00;EUR\n\
         01.03.2020;Wiederanlage der Ausschuettung;Renten;X;;0,010;50,00;0,50;EUR\n\
         01.04.2020;Gutschrift Zulage;Aktien / A;X;;1,000;100,00;175,00;EUR\n"
    );
    let filter = DateFilter::new(
        NaiveDate::from_ymd_opt(2020, 2, 1),
        NaiveDate::from_ymd_opt(2020, 3, 1),
    );
    let (qif, read, written) = run(&export, filter).unwrap();
    assert_eq!(read, 5);
    assert_eq!(written, 3);

    let recs = records(&qif);
    let kinds: Vec<_> = recs.iter().map(|r| r[2]).collect();
    assert_eq!(kinds, vec!["NVerkauf", "NKauf", "NRetshrs"]);
    assert_eq!(recs[2].last(), Some(&"YRenten"));
    assert_eq!(recs[2][recs[2].len() - 2], "LKapitalerträge:sonstige Einnahme");
}

#[test]
fn test_unknown_label_produces_nothing() {
    let export = format!(
        "{HEADER}01.03.2020;Beitrag;F;X;;1;1;1;EUR\n02.03.2020;Foobar;F;X;;1;1;1;EUR\n"
    );
    let err = run(&export, DateFilter::default()).unwrap_err();
    assert_eq!(err.to_string(), "unknown transaction: Foobar");
}

#[test]
fn test_structural_error_stops_before_mapping() {
    let export = format!("{HEADER}01.03.2020;Foobar;F;X;1;1;1;EUR\n");
    // attribute count is checked before the unknown label could be seen
    assert!(matches!(
        run(&export, DateFilter::default()),
        Err(ConvertError::AttributeCount { found: 8, .. })
    ));
}
