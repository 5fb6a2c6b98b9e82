/// パラメータ開始を明示する区切りトークン
pub const SEPARATOR: &str = "--";

/// 呼び出し引数を分割した結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub alias_name: String,
    pub parameters: Vec<String>,
}

/// 呼び出し引数をエイリアス名とパラメータ列に分割する
///
/// 先頭トークンがエイリアス名。直後のトークンが `--` の場合のみ区切りとして
/// 読み飛ばし、それ以外の位置の `--` は通常のパラメータとして扱う。
/// 空入力は空のエイリアス名を返すので、呼び出し側で検出すること。
pub fn split<S: AsRef<str>>(tokens: &[S]) -> ParsedInvocation {
    let Some((first, rest)) = tokens.split_first() else {
        return ParsedInvocation::default();
    };

    let rest = match rest.split_first() {
        Some((next, after)) if next.as_ref() == SEPARATOR => after,
        _ => rest,
    };

    ParsedInvocation {
        alias_name: first.as_ref().to_string(),
        parameters: rest.iter().map(|t| t.as_ref().to_string()).collect(),
    }
}
