//! End-to-end tests of the fund audit reports.
//!
//! Each test writes fixture workbooks into a temporary data directory, runs
//! a report and checks the text report and derived spreadsheet:
//! - Servant fund audit (duplicates, scenarios, contribution totals)
//! - Retiree fund audit (sheet selection, column alias)
//! - Pensioner fund audit (exclusion, incompatible-only output)
//! - Exploratory servant profile
//! - Input selection and error cases

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use fund_audit::config::{AuditConfig, UndefinedFundPolicy};
use fund_audit::datasets::DatasetKind;
use fund_audit::error::AuditError;
use fund_audit::pipeline::{EXPLORATORY_REPORT_FILE, run_exploratory, run_fund_audit};

// =============================================================================
// Test Helpers
// =============================================================================

enum V {
    N(f64),
    T(&'static str),
    B,
}

struct Sheet {
    name: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<V>>,
}

const SERVIDOR_HEADERS: &[&str] = &[
    "ID_SERVIDOR_MATRICULA",
    "ID_SERVIDOR_CPF",
    "CO_TIPO_FUNDO",
    "NO_ORGAO",
    "CO_SITUACAO_FUNCIONAL",
    "VL_CONTRIBUICAO",
    "DT_ING_ENTE",
    "DT_NASC_SERVIDOR",
    "IN_PREV_COMP",
];

fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).unwrap();
        for (col, header) in (0u16..).zip(sheet.headers.iter()) {
            worksheet.write_string(0, col, *header).unwrap();
        }
        for (row, values) in (1u32..).zip(sheet.rows.iter()) {
            for (col, value) in (0u16..).zip(values.iter()) {
                match value {
                    V::N(n) => {
                        worksheet.write_number(row, col, *n).unwrap();
                    }
                    V::T(t) => {
                        worksheet.write_string(row, col, *t).unwrap();
                    }
                    V::B => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

struct Fixture {
    _dir: TempDir,
    data_dir: PathBuf,
    config: AuditConfig,
}

fn create_fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("dados");
    fs::create_dir(&data_dir).unwrap();
    let config = AuditConfig {
        data_dir: data_dir.clone(),
        results_dir: dir.path().join("resultados"),
        ..AuditConfig::default()
    };
    Fixture {
        _dir: dir,
        data_dir,
        config,
    }
}

#[allow(clippy::too_many_arguments)]
fn servidor_row(
    matricula: f64,
    cpf: f64,
    fund: V,
    agency: &'static str,
    status: f64,
    contribution: V,
    entry: &'static str,
    birth: &'static str,
    pension: f64,
) -> Vec<V> {
    vec![
        V::N(matricula),
        V::N(cpf),
        fund,
        V::T(agency),
        V::N(status),
        contribution,
        V::T(entry),
        V::T(birth),
        V::N(pension),
    ]
}

/// The three-record example: records 1 and 3 share a CPF.
fn three_record_rows() -> Vec<Vec<V>> {
    vec![
        servidor_row(
            1.0,
            111.0,
            V::N(1.0),
            "SEFAZ",
            4.0,
            V::N(150.75),
            "2010-01-01",
            "1960-01-01",
            2.0,
        ),
        servidor_row(
            2.0,
            222.0,
            V::N(1.0),
            "SEDUC",
            1.0,
            V::N(80.0),
            "2020-01-01",
            "1950-01-01",
            1.0,
        ),
        servidor_row(3.0, 111.0, V::N(1.0), "SEDUC", 1.0, V::B, "2019-01-01", "1990-01-01", 2.0),
    ]
}

fn read_output(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let first = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&first).unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

fn column(rows: &[Vec<Data>], header: &str) -> Vec<Data> {
    let idx = rows[0]
        .iter()
        .position(|h| *h == Data::String(header.to_string()))
        .unwrap_or_else(|| panic!("missing output column {header}"));
    rows[1..]
        .iter()
        .map(|row| row.get(idx).cloned().unwrap_or(Data::Empty))
        .collect()
}

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

// =============================================================================
// Servant Fund Audit
// =============================================================================

#[test]
fn test_servant_three_record_example() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("SERVIDOR.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: three_record_rows(),
        }],
    );

    let run = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    let summary = run.summary.as_ref().unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.compatible, 2);
    assert_eq!(summary.incompatible, 1);
    assert_eq!(summary.duplicate_records, 2);
    assert_eq!(summary.duplicate_ids, 1);

    assert!(run.text.starts_with("1. Total de linhas: 3\n"));
    assert!(run.text.contains("2.1 - verdadeiro: 2"));
    assert!(run.text.contains("3. Fundos Compatíveis: 2 (66.67%)"));
    assert!(run.text.contains("4. Fundos Incompatíveis: 1 (33.33%)"));
    assert!(run.text.contains("4.1.1 - Incompatíveis no fundo FUNPREV: 1"));
    assert!(run.text.contains("5.1 - SEFAZ: 1"));
    assert!(run.text.contains("6.1 - Cenario 1: 0"));
    assert!(run.text.contains("6.3 - Cenario 3: 1"));
    assert!(run.text.contains("7.1 - nulo ou vazio: 1"));
    assert!(run.text.contains("8.1 - incompatível: 150.75"));

    let on_disk = fs::read_to_string(&run.report).unwrap();
    assert_eq!(on_disk, run.text);
    assert!(run.report.ends_with("SERVIDOR_resumo_analise.txt"));
}

#[test]
fn test_servant_spreadsheet_projection() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("servidores_2025.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: three_record_rows(),
        }],
    );

    let run = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    let spreadsheet = run.spreadsheet.unwrap();
    assert!(spreadsheet.ends_with("SERVIDOR_resultado.xlsx"));

    let rows = read_output(&spreadsheet);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].len(), 13);
    assert_eq!(rows[0][0], text("ID_SERVIDOR_MATRICULA"));
    assert_eq!(rows[0][12], text("CENARIO_FUNDO"));

    assert_eq!(
        column(&rows, "CO_TIPO_FUNDO"),
        vec![text("FUNPREV"), text("FUNPREV"), text("FUNPREV")]
    );
    assert_eq!(
        column(&rows, "CO_SITUACAO_FUNCIONAL"),
        vec![text("Cedido(a) com Ônus"), text("Em Exercício"), text("Em Exercício")]
    );
    assert_eq!(
        column(&rows, "IN_PREV_COMP"),
        vec![text("Não"), text("Sim"), text("Não")]
    );
    assert_eq!(
        column(&rows, "CPF_DUPLICADO"),
        vec![Data::Bool(true), Data::Bool(false), Data::Bool(true)]
    );
    assert_eq!(
        column(&rows, "CALCULO_FUNDO"),
        vec![text("FUNFIN"), text("FUNPREV"), text("FUNPREV")]
    );
    assert_eq!(
        column(&rows, "COMPATIBILIDADE_FUNDO"),
        vec![text("incompativel"), text("compativel"), text("compativel")]
    );
    assert_eq!(
        column(&rows, "CENARIO_FUNDO"),
        vec![text("Cenario 3"), Data::Empty, Data::Empty]
    );
}

#[test]
fn test_servant_undefined_fund_counts_as_incompatible() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("servidor.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: vec![vec![
                V::N(1.0),
                V::N(555.0),
                V::N(1.0),
                V::T("SEFAZ"),
                V::N(1.0),
                V::N(10.0),
                V::B,
                V::T("data invalida"),
                V::B,
            ]],
        }],
    );

    let run = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    let summary = run.summary.unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.incompatible, 1);
    assert_eq!(summary.scenarios, [1, 0, 0]);
    assert!(run.text.contains("4. Fundos Incompatíveis: 1 (100.00%)"));
}

#[test]
fn test_servant_undefined_fund_excluded_when_configured() {
    let mut fixture = create_fixture();
    fixture.config.undefined_fund.servidores = UndefinedFundPolicy::Exclude;
    let mut rows = three_record_rows();
    rows.push(vec![
        V::N(4.0),
        V::N(444.0),
        V::N(2.0),
        V::T("SESAU"),
        V::N(1.0),
        V::N(10.0),
        V::B,
        V::B,
        V::B,
    ]);
    write_workbook(
        &fixture.data_dir.join("servidor.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows,
        }],
    );

    let run = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    let summary = run.summary.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.excluded, 1);
    assert!(run.text.contains("Registros excluídos (fundo indefinido): 1"));
}

#[test]
fn test_servant_empty_sheet_reports_zero_percentages() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("servidor.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: vec![],
        }],
    );

    let run = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    assert!(run.text.contains("1. Total de linhas: 0"));
    assert!(run.text.contains("3. Fundos Compatíveis: 0 (0.00%)"));
    assert!(run.text.contains("4. Fundos Incompatíveis: 0 (0.00%)"));
    assert!(run.text.contains("8.1 - incompatível: 0.00"));

    let rows = read_output(run.spreadsheet.as_ref().unwrap());
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_servant_missing_column_fails() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("servidor.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: &["ID_SERVIDOR_CPF", "DT_NASC_SERVIDOR"],
            rows: vec![vec![V::N(1.0), V::T("1960-01-01")]],
        }],
    );

    let result = run_fund_audit(DatasetKind::Servidores, &fixture.config);
    assert!(matches!(result, Err(AuditError::MissingColumn { .. })));
}

// =============================================================================
// Retiree Fund Audit
// =============================================================================

#[test]
fn test_retiree_sheet_selection_and_alias() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("Aposentados_SET.xlsx"),
        &[
            Sheet {
                name: "Resumo",
                headers: &["Nota"],
                rows: vec![vec![V::T("gerado automaticamente")]],
            },
            Sheet {
                name: "APOSENTADOS",
                headers: &[
                    "ID_APOSENTADO_MATRICULA",
                    "ID_APOSENTADO_CPF",
                    "CO_TIPO_FUNDO",
                    "NO_ORGAO",
                    "CO_TIPO_APOSENTADORIA",
                    "VL_APOSENTADORIA",
                    "VL_CONTRIBUICAO",
                    "DATA DE INGRESSO NO ENTE",
                    "DT_NASC_APOSENTADO",
                    "IN_PREV_COMP",
                ],
                rows: vec![
                    vec![
                        V::N(1.0),
                        V::N(500.0),
                        V::N(2.0),
                        V::T("SEFAZ"),
                        V::N(1.0),
                        V::N(3000.0),
                        V::N(300.0),
                        V::T("2000-01-01"),
                        V::T("1960-01-01"),
                        V::N(2.0),
                    ],
                    vec![
                        V::N(2.0),
                        V::N(501.0),
                        V::N(2.0),
                        V::T("SEDUC"),
                        V::N(2.0),
                        V::N(3000.0),
                        V::N(250.5),
                        V::T("01/01/2000"),
                        V::T("1950-01-01"),
                        V::N(2.0),
                    ],
                ],
            },
        ],
    );

    let run = run_fund_audit(DatasetKind::Aposentados, &fixture.config).unwrap();
    assert_eq!(run.sheet, "APOSENTADOS");

    let lines: Vec<&str> = run.text.lines().collect();
    assert_eq!(lines[0], "1. Total de linhas: 2");
    assert!(lines.contains(&"2. Fundos Compatíveis: 1 (50.00%)"));
    assert!(lines.contains(&"3. Fundos Incompatíveis: 1 (50.00%)"));
    assert!(lines.contains(&"3.1.1 - Incompatíveis no fundo FUNFIN: 1"));
    assert!(lines.contains(&"4.1 - SEDUC: 1"));
    assert!(lines.contains(&"5.1 - Cenario 1: 1"));
    assert!(lines.contains(&"6. Valor total VL_CONTRIBUICAO incompatível: 250.50"));
    assert!(lines.contains(&"7. CPF_DUPLICADO verdadeiro: 0"));

    let rows = read_output(run.spreadsheet.as_ref().unwrap());
    assert_eq!(rows[0].len(), 14);
    assert_eq!(
        column(&rows, "CO_TIPO_APOSENTADORIA"),
        vec![
            text("Aposentadoria por Idade"),
            text("Aposentadoria por Tempo de Contribuição")
        ]
    );
    assert_eq!(column(&rows, "VL_APOSENTADORIA")[0], Data::Float(3000.0));
}

// =============================================================================
// Pensioner Fund Audit
// =============================================================================

#[test]
fn test_pensioner_exclusion_and_incompatible_only_output() {
    let fixture = create_fixture();
    let pension_row = |matricula: f64, cpf: f64, agency, fund, birth| {
        vec![
            V::N(matricula),
            V::N(cpf),
            V::T(agency),
            fund,
            birth,
            V::N(matricula + 100.0),
            V::N(cpf + 1000.0),
            V::N(50.0),
        ]
    };
    write_workbook(
        &fixture.data_dir.join("pensionistas.xlsx"),
        &[Sheet {
            name: "PENSIONISTAS",
            headers: &[
                "ID_INSTITUIDOR_MATRICULA",
                "ID_INSTITUIDOR_CPF",
                "NO_ORGAO",
                "CO_TIPO_FUNDO",
                "DT_NASC_INSTITUIDOR",
                "ID_PENSIONISTA_MATRICULA",
                "ID_PENSIONISTA_CPF",
                "VL_CONTRIBUICAO",
            ],
            rows: vec![
                pension_row(1.0, 10.0, "SEFAZ", V::N(1.0), V::T("1950-01-01")),
                pension_row(2.0, 20.0, "SEDUC", V::T("FUNFIN"), V::T("1950-05-05")),
                pension_row(3.0, 30.0, "SEDUC", V::N(1.0), V::T("1970-01-01")),
                pension_row(4.0, 20.0, "SEDUC", V::N(2.0), V::B),
            ],
        }],
    );

    let run = run_fund_audit(DatasetKind::Pensionistas, &fixture.config).unwrap();
    let expected_head = concat!(
        "1. Total analisados (FUNPREV): 3\n",
        "2. Compatíveis: 1 (33.33%)\n",
        "3. Incompatíveis: 2 (66.67%)\n",
        "4. CPF duplicados: 2\n",
        "\n5. Top 5 órgãos com incompatíveis:\n",
        "5.1 - SEDUC: 2\n",
    );
    assert!(run.text.starts_with(expected_head), "got:\n{}", run.text);
    assert!(run.text.contains("Registros excluídos (fundo indefinido): 1"));

    let spreadsheet = run.spreadsheet.unwrap();
    assert!(spreadsheet.ends_with("PENSIONISTAS_incompativeis.xlsx"));
    let rows = read_output(&spreadsheet);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].len(), 11);
    assert_eq!(
        column(&rows, "COMPATIBILIDADE_FUNDO"),
        vec![text("incompativel"), text("incompativel")]
    );
    assert_eq!(
        column(&rows, "CO_TIPO_FUNDO"),
        vec![text("FUNFIN"), text("FUNFIN")]
    );
    assert_eq!(
        column(&rows, "ID_PENSIONISTA_MATRICULA"),
        vec![Data::Float(102.0), Data::Float(104.0)]
    );
}

// =============================================================================
// Exploratory Profile
// =============================================================================

#[test]
fn test_exploratory_profile_report() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("SERVIDOR.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: &[
                "ID_SERVIDOR_CPF",
                "CO_TIPO_FUNDO",
                "NO_ORGAO",
                "CO_TIPO_CARGO",
                "CO_SEXO_SERVIDOR",
                "CO_EST_CIVIL_SERVIDOR",
                "CO_SITUACAO_FUNCIONAL",
                "DT_NASC_SERVIDOR",
                "DT_ING_SERV_PUB",
                "DT_ING_ENTE",
                "VL_BASE_CALCULO",
                "VL_TETO_ESPECIFICO",
                "VL_REMUNERACAO",
                "IN_ABONO_PERMANENCIA",
                "IN_PREV_COMP",
            ],
            rows: vec![
                vec![
                    V::N(111.0),
                    V::N(1.0),
                    V::T("SEFAZ"),
                    V::N(2.0),
                    V::N(1.0),
                    V::N(2.0),
                    V::N(1.0),
                    V::T("1980-01-01"),
                    V::T("1995-01-01"),
                    V::T("2000-01-01"),
                    V::N(1500.0),
                    V::N(10000.0),
                    V::N(3000.0),
                    V::N(2.0),
                    V::N(1.0),
                ],
                vec![
                    V::N(111.0),
                    V::N(2.0),
                    V::T("SEFAZ"),
                    V::N(7.0),
                    V::N(2.0),
                    V::N(1.0),
                    V::N(1.0),
                    V::T("1960-01-01"),
                    V::T("1990-01-01"),
                    V::T("1990-01-01"),
                    V::N(5000.0),
                    V::N(10000.0),
                    V::N(12000.0),
                    V::N(1.0),
                    V::N(2.0),
                ],
            ],
        }],
    );

    let run = run_exploratory(&fixture.config).unwrap();
    assert!(run.spreadsheet.is_none());
    assert!(run.report.ends_with(EXPLORATORY_REPORT_FILE));

    let separator = "-".repeat(60);
    let report = fs::read_to_string(&run.report).unwrap();
    assert_eq!(report, run.text);
    assert!(report.starts_with(&format!("Total de linhas:\n2\n{separator}\n")));
    assert!(report.contains(&format!("CPFs duplicados:\n1\n{separator}\n")));
    assert!(report.contains("Servidores por órgão:\n   Órgão  Contagem\n0  SEFAZ         2\n"));
    assert!(report.contains(&format!(
        "Ingressos no serviço público com menos de 18 anos:\n1\n{separator}\n"
    )));
    assert!(report.contains(&format!("Remuneração acima do teto:\n1\n{separator}\n")));
    assert!(report.contains(&format!("Abono de permanência (Sim):\n1\n{separator}\n")));
    assert!(report.contains("Faixas de idade:\ncount   2.000000\n"));
}

// =============================================================================
// Input Selection and Errors
// =============================================================================

#[test]
fn test_newest_matching_workbook_wins() {
    let fixture = create_fixture();
    let old = fixture.data_dir.join("servidor_agosto.xlsx");
    let new = fixture.data_dir.join("servidor_setembro.xlsx");
    write_workbook(
        &old,
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: three_record_rows().into_iter().take(1).collect(),
        }],
    );
    write_workbook(
        &new,
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: three_record_rows(),
        }],
    );
    write_workbook(
        &fixture.data_dir.join("aposentado.xlsx"),
        &[Sheet {
            name: "APOSENTADOS",
            headers: &["X"],
            rows: vec![],
        }],
    );

    let now = SystemTime::now();
    File::options()
        .write(true)
        .open(&old)
        .unwrap()
        .set_modified(now - Duration::from_secs(3600))
        .unwrap();
    File::options()
        .write(true)
        .open(&new)
        .unwrap()
        .set_modified(now)
        .unwrap();

    let run = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    assert_eq!(run.input, new);
    assert_eq!(run.summary.unwrap().total, 3);
}

#[test]
fn test_missing_input_aborts_before_output() {
    let fixture = create_fixture();
    let result = run_fund_audit(DatasetKind::Pensionistas, &fixture.config);

    assert!(matches!(result, Err(AuditError::InputNotFound { .. })));
    assert!(!fixture.config.results_dir.exists());
}

#[test]
fn test_missing_data_dir_aborts_before_output() {
    let mut fixture = create_fixture();
    fixture.config.data_dir = fixture.data_dir.join("nao_existe");
    let result = run_exploratory(&fixture.config);

    assert!(matches!(result, Err(AuditError::DataDirNotFound { .. })));
    assert!(!fixture.config.results_dir.exists());
}

#[test]
fn test_runs_get_distinct_ids() {
    let fixture = create_fixture();
    write_workbook(
        &fixture.data_dir.join("servidor.xlsx"),
        &[Sheet {
            name: "SERVIDOR",
            headers: SERVIDOR_HEADERS,
            rows: three_record_rows(),
        }],
    );

    let first = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    let second = run_fund_audit(DatasetKind::Servidores, &fixture.config).unwrap();
    assert_ne!(first.run_id, second.run_id);
    assert!(second.started_at >= first.started_at);
    assert_eq!(first.text, second.text);
}
