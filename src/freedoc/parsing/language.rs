//! Code language detection
//!
//! Assigns a best-guess language tag to an assembled code block. Signature
//! checks run against the lowercased block text in a fixed priority order;
//! earlier entries intentionally shadow later, broader ones (a loose
//! `function` check must not fire before the stricter SQL check).

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback tag when no signature matches.
pub const PSEUDOCODE: &str = "pseudocode";

type Signature = fn(&str) -> bool;

/// Detection order. Declaration order is the disambiguation mechanism.
const SIGNATURES: &[(&str, Signature)] = &[
    ("sql", looks_like_sql),
    ("python", looks_like_python),
    ("vba", looks_like_vba),
    ("javascript", looks_like_javascript),
    ("csharp", looks_like_csharp),
    ("java", looks_like_java),
    ("powershell", looks_like_powershell),
    ("yaml", looks_like_yaml),
    ("json", looks_like_json),
    ("bash", looks_like_bash),
];

static SQL_SELECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\bselect\b.*\bfrom\b").unwrap());
static SQL_UPDATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\bupdate\b.*\bset\b").unwrap());
static POWERSHELL_VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\w+\s*=").unwrap());
static POWERSHELL_VERB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(get|set|new|invoke|write|remove)-\w+").unwrap());
static YAML_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+:(\s|$)").unwrap());
static JSON_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]+"\s*:"#).unwrap());

/// Detect the language of a code block from its full text.
pub fn detect_language(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    for (name, signature) in SIGNATURES {
        if signature(&lower) {
            return name;
        }
    }
    PSEUDOCODE
}

fn looks_like_sql(t: &str) -> bool {
    SQL_SELECT_RE.is_match(t)
        || SQL_UPDATE_RE.is_match(t)
        || t.contains("insert into ")
        || t.contains("delete from ")
        || t.contains("create table")
        || t.contains("alter table")
}

fn looks_like_python(t: &str) -> bool {
    (t.contains("def ") && t.contains(":"))
        || t.contains("self.")
        || t.contains("elif ")
        || (t.contains("from ") && t.contains(" import "))
        || t.contains("__name__")
}

fn looks_like_vba(t: &str) -> bool {
    t.contains("end sub")
        || t.contains("end function")
        || t.contains("end if")
        || t.contains("dim ")
        || t.contains("msgbox")
}

fn looks_like_javascript(t: &str) -> bool {
    t.contains("function ")
        || t.contains("function(")
        || t.contains("=>")
        || t.contains("const ")
        || t.contains("let ")
        || t.contains("console.log")
}

fn looks_like_csharp(t: &str) -> bool {
    t.contains("using system")
        || t.contains("namespace ")
        || t.contains("console.writeline")
}

fn looks_like_java(t: &str) -> bool {
    t.contains("public class")
        || t.contains("public static")
        || t.contains("system.out.println")
        || (t.contains("private ") && t.contains(";"))
        || (t.contains("public ") && t.contains("void "))
}

fn looks_like_powershell(t: &str) -> bool {
    POWERSHELL_VAR_RE.is_match(t) || POWERSHELL_VERB_RE.is_match(t)
}

fn looks_like_yaml(t: &str) -> bool {
    if t.contains('{') || t.contains(';') {
        return false;
    }
    let key_lines = t
        .lines()
        .filter(|line| YAML_KEY_RE.is_match(line.trim_start()))
        .count();
    let dash_lines = t
        .lines()
        .filter(|line| line.trim_start().starts_with("- "))
        .count();
    key_lines >= 2 || (key_lines >= 1 && dash_lines >= 1)
}

fn looks_like_json(t: &str) -> bool {
    let first = t.trim_start().chars().next();
    matches!(first, Some('{') | Some('[')) && JSON_KEY_RE.is_match(t)
}

fn looks_like_bash(t: &str) -> bool {
    t.contains("#!") || t.contains("echo ") || t.contains("export ") || t.contains("sudo ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_detection() {
        assert_eq!(detect_language("SELECT x FROM y"), "sql");
        assert_eq!(detect_language("SELECT *\nFROM pedidos\nWHERE id = 1"), "sql");
        assert_eq!(detect_language("INSERT INTO t VALUES (1)"), "sql");
        assert_eq!(detect_language("UPDATE contas\nSET saldo = 0"), "sql");
    }

    #[test]
    fn test_python_detection() {
        assert_eq!(detect_language("def foo():\n    self.x = 1"), "python");
        assert_eq!(detect_language("from os import path"), "python");
    }

    #[test]
    fn test_vba_detection() {
        assert_eq!(
            detect_language("Sub Processar()\n    Dim total As Integer\nEnd Sub"),
            "vba"
        );
    }

    #[test]
    fn test_javascript_detection() {
        assert_eq!(detect_language("const total = itens.map(i => i.valor)"), "javascript");
    }

    #[test]
    fn test_csharp_detection() {
        assert_eq!(
            detect_language("using System;\nConsole.WriteLine(\"oi\");"),
            "csharp"
        );
    }

    #[test]
    fn test_java_detection() {
        assert_eq!(
            detect_language("public class Robo {\n    public static void main(String[] args) {}\n}"),
            "java"
        );
    }

    #[test]
    fn test_powershell_detection() {
        assert_eq!(detect_language("$total = Get-ChildItem | Measure-Object"), "powershell");
    }

    #[test]
    fn test_yaml_detection() {
        assert_eq!(detect_language("nome: robo\netapas:\n  - login\n  - download"), "yaml");
    }

    #[test]
    fn test_json_detection() {
        assert_eq!(detect_language("{\n  \"nome\": \"robo\"\n}"), "json");
    }

    #[test]
    fn test_bash_detection() {
        assert_eq!(detect_language("#!/bin/sh\nrun_job"), "bash");
    }

    #[test]
    fn test_sql_shadows_python_import() {
        // A block with both signals resolves by priority order
        assert_eq!(
            detect_language("select id from pedidos\nself.total = 0"),
            "sql"
        );
    }

    #[test]
    fn test_pseudocode_fallback() {
        assert_eq!(detect_language("abrir portal\nbaixar arquivos"), PSEUDOCODE);
        assert_eq!(detect_language(""), PSEUDOCODE);
    }
}
