use chrono::NaiveDate;
use rn2md_engine::{load_daily_entries, parse_dates, render_entries};

const MARCH_2018: &str = r#"22:
  text: "=Standup=\n+ review //parser// changes\n+ pair on ``list_state``\n"
23:
  text: |
    =Retro=
    --Ship on Friday.--
    See [the board ""https://example.com/board_1""].
    + keep
      + short meetings
    + drop


    + new list
"#;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn renders_a_work_week_from_disk() {
    let data_dir = tempfile::tempdir().unwrap();
    std::fs::write(data_dir.path().join("2018-03.txt"), MARCH_2018).unwrap();

    let entries = load_daily_entries(data_dir.path()).unwrap();
    let dates = parse_dates("yesterday", date("2018-03-26"), true).unwrap();
    assert_eq!(dates, vec![date("2018-03-23")]);

    let out = render_entries(&entries, &[date("2018-03-22"), dates[0]], 1);

    insta::assert_snapshot!(out, @r"
# Thu Mar 22, 2018
## Standup
1. review _parser_ changes
2. pair on `list_state`


# Fri Mar 23, 2018
## Retro
**OBSOLETE**(Ship on Friday)
See [the board](https://example.com/board_1).
1. keep
  1. short meetings
2. drop


1. new list
");
}

#[test]
fn each_entry_starts_with_fresh_list_numbering() {
    let data_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        data_dir.path().join("2018-03.txt"),
        "1: {text: \"+ a\\n+ b\"}\n2: {text: \"+ c\"}\n",
    )
    .unwrap();

    let entries = load_daily_entries(data_dir.path()).unwrap();
    let out = render_entries(&entries, &[date("2018-03-01"), date("2018-03-02")], 0);

    assert_eq!(
        out,
        "# Thu Mar 01, 2018\n1. a\n2. b\n\n\n# Fri Mar 02, 2018\n1. c"
    );
}
