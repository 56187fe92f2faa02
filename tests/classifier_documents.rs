//! Document-level classification tests
//!
//! These tests run full documents through the pipeline and assert on the
//! resulting element sequence with the fluent assertion API.

use freedoc::freedoc::parse_document;
use freedoc::freedoc::testing::assert_elements;
use rstest::rstest;

#[test]
fn test_empty_and_blank_documents() {
    assert!(parse_document("").is_empty());
    assert!(parse_document("\n").is_empty());
    assert!(parse_document("\n\n\n\n").is_empty());
    assert!(parse_document("   \n \t \n").is_empty());
}

#[test]
fn test_full_process_document() {
    let source = "\
PDD - AUTOMAÇÃO DE CONCILIAÇÃO

Responsável: João Silva
Sistema: SAP ECC

1. Introdução
Este documento descreve o processo de conciliação bancária.

1.1 Escopo

- Conferir lançamentos
- Exportar relatório

2. Consulta

sql
Copy code
SELECT *
FROM lancamentos
WHERE status = 'PENDENTE'

3. Checklist

✓ Acesso validado
✗ Credenciais do portal

| Etapa | Sistema |
|-------|---------|
| Login | Portal  |
| Baixa | SAP     |";

    let elements = parse_document(source);
    assert_elements(&elements)
        .item_count(14)
        .item(0, |e| {
            e.assert_heading().level(1).title("PDD - AUTOMAÇÃO DE CONCILIAÇÃO");
        })
        .item(1, |e| {
            e.assert_field().key("Responsável").value("João Silva");
        })
        .item(2, |e| {
            e.assert_field().key("Sistema").value("SAP ECC");
        })
        .item(3, |e| {
            e.assert_heading().level(1).numbering(Some("1")).title("Introdução");
        })
        .item(4, |e| {
            e.assert_paragraph("Este documento descreve o processo de conciliação bancária.");
        })
        .item(5, |e| {
            e.assert_heading().level(2).numbering(Some("1.1")).title("Escopo");
        })
        .item(6, |e| e.assert_bullet("Conferir lançamentos"))
        .item(7, |e| e.assert_bullet("Exportar relatório"))
        .item(8, |e| {
            e.assert_heading().level(1).numbering(Some("2")).title("Consulta");
        })
        .item(9, |e| {
            e.assert_code_block()
                .language("sql")
                .line_count(3)
                .contains("SELECT *")
                .contains("WHERE status = 'PENDENTE'");
        })
        .item(10, |e| {
            e.assert_heading().level(1).numbering(Some("3")).title("Checklist");
        })
        .item(11, |e| e.assert_check_yes("Acesso validado"))
        .item(12, |e| e.assert_check_no("Credenciais do portal"))
        .item(13, |e| {
            e.assert_table()
                .headers(&["Etapa", "Sistema"])
                .row_count(2)
                .row(0, &["Login", "Portal"])
                .row(1, &["Baixa", "SAP"]);
        });
}

#[test]
fn test_high_confidence_code_wins_over_surrounding_prose() {
    let source = "O passo seguinte executa a consulta.\nSELECT * FROM customers WHERE id = 1\nDepois o resultado é salvo.";
    let elements = parse_document(source);

    let code_blocks: Vec<_> = elements
        .iter()
        .filter(|e| e.kind() == "code_block")
        .collect();
    assert_eq!(code_blocks.len(), 1);
    match code_blocks[0] {
        freedoc::freedoc::Element::CodeBlock(block) => {
            assert!(block.text.contains("SELECT * FROM customers"));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_table_minimum_rows() {
    // Header plus alignment row only: no table comes out
    assert!(parse_document("| A | B |\n|---|---|").is_empty());

    // Header plus one data row
    let elements = parse_document("| A | B |\n| 1 | 2 |");
    assert_elements(&elements).item_count(1).item(0, |e| {
        e.assert_table().headers(&["A", "B"]).row(0, &["1", "2"]);
    });
}

#[rstest]
#[case("1. Introdução", 1, Some("1"), "Introdução")]
#[case("1.1 Escopo", 2, Some("1.1"), "Escopo")]
#[case("1.1.1 Detalhe", 3, Some("1.1.1"), "Detalhe")]
#[case("# Visão Geral", 1, None, "Visão Geral")]
#[case("### Premissas", 3, None, "Premissas")]
fn test_section_numbering_depth(
    #[case] source: &str,
    #[case] level: u8,
    #[case] numbering: Option<&str>,
    #[case] title: &str,
) {
    let elements = parse_document(source);
    assert_elements(&elements).item_count(1).item(0, |e| {
        e.assert_heading().level(level).numbering(numbering).title(title);
    });
}

#[test]
fn test_rpa_special_form() {
    let elements = parse_document("RPA 3 - Conciliação");
    assert_elements(&elements).item_count(1).item(0, |e| {
        e.assert_rpa_section().number("3").title("Conciliação");
    });
}

#[test]
fn test_field_extraction() {
    let elements = parse_document("Responsável: João Silva");
    assert_elements(&elements).item_count(1).item(0, |e| {
        e.assert_field().key("Responsável").value("João Silva");
    });
}

#[test]
fn test_language_detection_on_blocks() {
    let python = parse_document("Copy code\ndef foo():\n    self.x = 1");
    assert_elements(&python).item(0, |e| {
        e.assert_code_block().language("python");
    });

    let sql = parse_document("Copy code\nSELECT x FROM y");
    assert_elements(&sql).item(0, |e| {
        e.assert_code_block().language("sql");
    });

    let pseudo = parse_document("Copy code\nabrir o portal\nbaixar os arquivos");
    assert_elements(&pseudo).item(0, |e| {
        e.assert_code_block().language("pseudocode");
    });
}

#[test]
fn test_ascii_diagram_grouping() {
    let source = "Fluxo:\n┌────────┐\n│ Portal │\n└────────┘";
    let elements = parse_document(source);
    assert_elements(&elements).item_count(2).item(1, |e| {
        e.assert_ascii_diagram("│ Portal │");
    });
}

#[test]
fn test_numbered_steps_stay_list_items() {
    let source = "1. Fazer login no sistema e abrir o menu principal\n2. Exportar o relatório de pendências do dia";
    let elements = parse_document(source);
    assert_elements(&elements)
        .item_count(2)
        .item(0, |e| {
            e.assert_numbered("1", "Fazer login no sistema e abrir o menu principal");
        })
        .item(1, |e| {
            e.assert_numbered("2", "Exportar o relatório de pendências do dia");
        });
}

#[test]
fn test_round_trip_accounting() {
    // Every non-empty input line must land in exactly one element, except
    // lines consumed purely as markers or separators
    let source = "Objetivo\nResponsável: Ana\nCopy code\ntotal = somar(itens)\n--------\n- conferir resultado\nEncerramento";
    let elements = parse_document(source);

    let mut all_text = String::new();
    for element in &elements {
        all_text.push_str(&format!("{:?}\n", element));
    }

    for line in source.lines() {
        let trimmed = line.trim();
        let is_marker = trimmed == "Copy code";
        let is_separator = !trimmed.is_empty() && trimmed.chars().all(|c| c == '-');
        if trimmed.is_empty() || is_marker || is_separator {
            continue;
        }
        // Field values and stripped glyphs survive; probe for the content part
        let probe = match trimmed.split_once(": ") {
            Some((_, value)) => value,
            None => trimmed.trim_start_matches(['-', ' ']),
        };
        assert!(
            all_text.contains(probe),
            "line '{}' missing from elements: {}",
            trimmed,
            all_text
        );
    }
}

#[test]
fn test_separator_and_marker_lines_emit_no_content() {
    let elements = parse_document("texto\n--------\nmais texto");
    assert_elements(&elements)
        .item_count(3)
        .item(0, |e| e.assert_paragraph("texto"))
        .item(1, |e| e.assert_separator())
        .item(2, |e| e.assert_paragraph("mais texto"));
}
