use crate::model::{AccessCodes, ModeFlags};

/// Joins the label of every set mode flag with " / ", in fixed priority order.
pub fn mode_label(m: &ModeFlags) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let table: [(bool, &str); 11] = [
        (m.wfm, "WFM"),
        (m.nfm, "NFM"),
        (m.dstar_dv, "D-Star"),
        (m.dstar_dd, "D-Star DD"),
        (m.dmr, "DMR"),
        (m.ysf, "YSF"),
        (m.p25, "P25"),
        (m.p25_phase2, "P25 Phase 2"),
        (m.nxdn, "NXDN"),
        (m.atv, "Analog TV"),
        (m.datv, "Digital TV"),
    ];
    for (set, label) in table {
        if !set {
            continue;
        }
        // D-Star data spells itself out when nothing precedes it
        if label == "D-Star DD" && parts.is_empty() {
            parts.push("D-Star Digital Data");
        } else {
            parts.push(label);
        }
    }
    parts.join(" / ")
}

/// Access code summary, e.g. `123.0/100.0 / DCS: 023 / 1 / NAC: 293`.
pub fn code_label(c: &AccessCodes) -> String {
    let mut parts: Vec<String> = Vec::new();

    let ctcss: Vec<&str> = [c.ctcss_in.as_deref(), c.ctcss_out.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !ctcss.is_empty() {
        parts.push(ctcss.join("/"));
    }

    let prefixed = [
        ("DCS: ", c.dcs.as_deref()),
        ("", c.dmr_cc.as_deref()),
        ("DSC: ", c.ysf_dsc.as_deref()),
        ("NAC: ", c.p25_nac.as_deref()),
        ("RAN: ", c.nxdn_ran.as_deref()),
    ];
    for (prefix, code) in prefixed {
        if let Some(code) = code {
            parts.push(format!("{prefix}{code}"));
        }
    }
    parts.join(" / ")
}

/// Upper-cases the first letter of each alphabetic run and lower-cases the
/// rest, so `KING CO./SNOHOMISH` becomes `King Co./Snohomish`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_modes_is_empty() {
        assert_eq!(mode_label(&ModeFlags::default()), "");
    }

    #[test]
    fn modes_follow_priority_order() {
        let m = ModeFlags { datv: true, dmr: true, wfm: true, ..Default::default() };
        assert_eq!(mode_label(&m), "WFM / DMR / Digital TV");

        let m = ModeFlags { nfm: true, ..Default::default() };
        assert_eq!(mode_label(&m), "NFM");
    }

    #[test]
    fn nxdn_mixed_is_not_rendered() {
        let m = ModeFlags { nxdn: true, nxdn_mixed: true, ..Default::default() };
        assert_eq!(mode_label(&m), "NXDN");
        let m = ModeFlags { nxdn_mixed: true, ..Default::default() };
        assert_eq!(mode_label(&m), "");
    }

    #[test]
    fn dstar_data_label_depends_on_position() {
        let m = ModeFlags { dstar_dd: true, ..Default::default() };
        assert_eq!(mode_label(&m), "D-Star Digital Data");
        let m = ModeFlags { dstar_dv: true, dstar_dd: true, ..Default::default() };
        assert_eq!(mode_label(&m), "D-Star / D-Star DD");
    }

    #[test]
    fn ctcss_pair_joins_without_spaces() {
        let c = AccessCodes {
            ctcss_in: Some("103.5".into()),
            ctcss_out: Some("100.0".into()),
            ..Default::default()
        };
        assert_eq!(code_label(&c), "103.5/100.0");

        let c = AccessCodes { ctcss_out: Some("100.0".into()), ..Default::default() };
        assert_eq!(code_label(&c), "100.0");
    }

    #[test]
    fn dmr_color_code_has_no_prefix() {
        let c = AccessCodes { dmr_cc: Some("1".into()), ..Default::default() };
        assert_eq!(code_label(&c), "1");

        let c = AccessCodes {
            dcs: Some("023".into()),
            dmr_cc: Some("1".into()),
            nxdn_ran: Some("7".into()),
            ..Default::default()
        };
        assert_eq!(code_label(&c), "DCS: 023 / 1 / RAN: 7");
    }

    #[test]
    fn codes_never_leave_stray_separators() {
        let c = AccessCodes {
            ctcss_in: Some("123.0".into()),
            ysf_dsc: Some("12".into()),
            p25_nac: Some("293".into()),
            ..Default::default()
        };
        let label = code_label(&c);
        assert_eq!(label, "123.0 / DSC: 12 / NAC: 293");
        assert!(!label.starts_with(" /") && !label.ends_with("/ "));
        assert_eq!(code_label(&AccessCodes::default()), "");
    }

    #[test]
    fn title_case_capitalizes_each_alphabetic_run() {
        assert_eq!(title_case("SEATTLE"), "Seattle");
        assert_eq!(title_case("mt. st. helens"), "Mt. St. Helens");
        assert_eq!(title_case("KING CO./SNOHOMISH-CO"), "King Co./Snohomish-Co");
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case("i-5 corridor"), "I-5 Corridor");
        assert_eq!(title_case(""), "");
    }
}
