// lib.rs - 库函数

use std::collections::HashSet;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed sample name \"{name}\": no '_' to split off a read suffix")]
    MalformedSampleName { name: String },
}

/// 列表格式残留字符（例如 `[s1_R1, s1_R2]` 被拆开后的 `[` `]` `,`）
const LIST_ARTIFACTS: [char; 3] = ['[', ']', ','];

/// 清理样本名：删除所有 `[`、`]`、`,`（不论位置）
pub fn normalize_sample_name(token: &str) -> String {
    token.chars().filter(|c| !LIST_ARTIFACTS.contains(c)).collect()
}

/// 取最后一个 `_` 之后的部分作为 read 后缀
///
/// 样本名前缀本身可能含有 `_`，所以必须从右边切。
pub fn read_suffix(name: &str) -> Result<&str> {
    name.rsplit_once('_')
        .map(|(_, suffix)| suffix)
        .ok_or_else(|| Error::MalformedSampleName { name: name.to_string() })
}

/// 成对 read 的命名风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPairing {
    /// `R1` + `R2`
    Upper,
    /// `r1` + `r2`
    Lower,
}

impl ReadPairing {
    pub fn suffixes(self) -> (&'static str, &'static str) {
        match self {
            ReadPairing::Upper => ("R1", "R2"),
            ReadPairing::Lower => ("r1", "r2"),
        }
    }
}

/// 一批样本名的后缀集合（顺序和重复都不影响判断）
#[derive(Debug, Default, Clone)]
pub struct ReadSuffixes {
    suffixes: HashSet<String>,
}

impl ReadSuffixes {
    /// 清理并切分每个样本名；遇到第一个没有 `_` 的名字就直接报错
    pub fn from_sample_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes = HashSet::new();
        for token in names {
            let name = normalize_sample_name(token.as_ref());
            let suffix = read_suffix(&name)?;
            log::debug!("{:?} -> {:?} (suffix {:?})", token.as_ref(), name, suffix);
            suffixes.insert(suffix.to_string());
        }
        Ok(ReadSuffixes { suffixes })
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(suffix)
    }

    /// 大小写不能混用：`R1` + `r2` 不算一对。两种都有时返回 `Upper`。
    pub fn pairing(&self) -> Option<ReadPairing> {
        [ReadPairing::Upper, ReadPairing::Lower]
            .into_iter()
            .find(|pairing| {
                let (forward, reverse) = pairing.suffixes();
                self.contains(forward) && self.contains(reverse)
            })
    }

    pub fn has_replicates(&self) -> bool {
        self.pairing().is_some()
    }
}

/// 判断样本名里是否同时有 R1/R2（或 r1/r2）
pub fn has_replicates<I, S>(names: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(ReadSuffixes::from_sample_names(names)?.has_replicates())
}
