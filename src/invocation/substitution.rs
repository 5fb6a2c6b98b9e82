/// 全パラメータを表すマーカー
const ALL_PARAMS_MARKERS: [&str; 2] = ["$@", "$*"];

/// テンプレートとパラメータの組み合わせ方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionMode {
    /// パラメータなし。テンプレートをそのまま使う
    Unchanged,
    /// 範囲内の位置マーカーか `$@` / `$*` を置換する
    Substitute,
    /// マーカーなし。パラメータを末尾に追加する
    AutoAppend,
}

/// 置換モードを判定する
///
/// `$1`〜`$N`（N はパラメータ数）のいずれか、または `$@` / `$*` が
/// 含まれていれば置換モード。範囲外の `$3` だけを含むテンプレートは
/// 末尾追加モードになり、`$3` はそのまま残る。
pub fn classify<S: AsRef<str>>(template: &str, parameters: &[S]) -> SubstitutionMode {
    if parameters.is_empty() {
        return SubstitutionMode::Unchanged;
    }

    let has_positional =
        (1..=parameters.len()).any(|i| template.contains(&positional_marker(i)));
    let has_all = ALL_PARAMS_MARKERS.iter().any(|m| template.contains(m));

    if has_positional || has_all {
        SubstitutionMode::Substitute
    } else {
        SubstitutionMode::AutoAppend
    }
}

/// コマンドテンプレートにパラメータを適用して最終コマンドを作る
///
/// 置換は単純な文字列置換で、シェルエスケープは行わない。
/// `$1` から昇順に置換するため、10 個以上のパラメータがあると `$10` は
/// `$1` の置換で先に書き換わる。また、あるパラメータ値に後続のマーカー
/// （`$2` や `$@` など）が含まれていれば、それも後続の段で置換される。
/// 出力を再度この関数に通すと結果が変わり得る（冪等ではない）。
pub fn substitute<S: AsRef<str>>(template: &str, parameters: &[S]) -> String {
    match classify(template, parameters) {
        SubstitutionMode::Unchanged => template.to_string(),
        SubstitutionMode::AutoAppend => format!("{template} {}", join(parameters)),
        SubstitutionMode::Substitute => {
            let mut result = template.to_string();

            for (index, param) in parameters.iter().enumerate() {
                result = result.replace(&positional_marker(index + 1), param.as_ref());
            }

            let all = join(parameters);
            for marker in ALL_PARAMS_MARKERS {
                if result.contains(marker) {
                    result = result.replace(marker, &all);
                }
            }

            result
        }
    }
}

fn positional_marker(index: usize) -> String {
    format!("${index}")
}

fn join<S: AsRef<str>>(parameters: &[S]) -> String {
    parameters
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
