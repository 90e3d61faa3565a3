use hoppman::script::ScriptTranslator;

/// 常见的 Hoppscotch 测试脚本整体翻译
#[test]
fn test_typical_test_script() {
    let script = r#"// Check status code is 2xx
pw.test("Status code is 2xx", ()=> {
    pw.expect(pw.response.status).toBeLevel2xx();
});

pw.test("Body", () => {
    pw.expect(pw.response.body.items).toHaveLength(10);
    pw.expect(pw.response.body.kind).toBeType("string");
    pw.expect(pw.response.body.kind).not.toBe("error");
    pw.expect(pw.response.headers["content-type"]).toInclude("json");
});"#;

    let expected = r#"// Check status code is 2xx
pm.test("Status code is 2xx", ()=> {
    pm.expect(pm.response.status).to.be.success;
});

pm.test("Body", () => {
    pm.expect(pm.response.json().items).to.have.lengthOf(10);
    pm.expect(pm.response.json().kind).to.be.a("string");
    pm.expect(pm.response.json().kind).to.not.equal("error");
    pm.expect(pm.response.headers["content-type"]).to.include("json");
});"#;

    assert_eq!(ScriptTranslator::translate(script), expected);
}

/// 典型的预请求脚本
#[test]
fn test_pre_request_script() {
    let script = "pw.env.set(\"ts\", Date.now().toString());\nconst id = pw.env.get(\"id\");\npw.env.unset(\"tmp\");";
    let lines = ScriptTranslator::translate_lines(script);
    assert_eq!(
        lines,
        vec![
            "pm.environment.set(\"ts\", Date.now().toString());",
            "const id = pm.environment.get(\"id\");",
            "pm.environment.unset(\"tmp\");",
        ]
    );
}

/// 所有状态级别断言
#[test]
fn test_status_levels() {
    let cases = [
        ("2", ".to.be.success"),
        ("3", ".to.be.redirection"),
        ("4", ".to.be.clientError"),
        ("5", ".to.be.serverError"),
    ];
    for (digit, expected) in cases {
        let script = format!("x.toBeLevel{}xx()", digit);
        assert_eq!(ScriptTranslator::translate(&script), format!("x{}", expected));
    }
    assert_eq!(ScriptTranslator::translate("x.toBeLevel1xx()"), "x.toBeLevel1xx()");
}

/// 多个 toBe 出现在同一行时互不影响
#[test]
fn test_multiple_assertions_on_one_line() {
    assert_eq!(
        ScriptTranslator::translate("a.toBe(1); b.not.toBe(2); c.toBe(3)"),
        "a.to.equal(1); b.to.not.equal(2); c.to.equal(3)"
    );
}

/// 翻译结果再次翻译不变
#[test]
fn test_translation_is_stable() {
    let once = ScriptTranslator::translate("pw.expect(pw.response.body.ok).toBe(true)");
    assert_eq!(once, "pm.expect(pm.response.json().ok).to.equal(true)");
    assert_eq!(ScriptTranslator::translate(&once), once);
}
