//! 英语 → 乌尔都语静态词典
//!
//! 编译期生成的 `phf` 表，进程生命周期内不可变，可被任意并发读取。

use phf::phf_map;

static URDU: phf::Map<&'static str, &'static str> = phf_map! {
    "this" => "یہ",
    "is" => "ہے",
    "a" => "ایک",
    "blog" => "بلاگ",
    "about" => "کے بارے میں",
    "summary" => "خلاصہ",
    "introduction" => "تعارف",
    "to" => "تک",
    "react" => "ری ایکٹ",
    "hooks" => "ہکس",
    "you" => "آپ",
    "can" => "سکتے ہیں",
    "use" => "استعمال کریں",
    "function" => "فنکشن",
    "functions" => "افعال",
    "state" => "حالت",
    "component" => "جزو",
    "components" => "اجزاء",
    "manage" => "انتظام کریں",
    "data" => "ڈیٹا",
    "without" => "بغیر",
    "class" => "کلاس",
    "based" => "پر مبنی",
    "code" => "کوڈ",
    "easier" => "آسان تر",
    "reuse" => "دوبارہ استعمال",
    "logic" => "منطق",
    "share" => "بانٹیں",
    "between" => "کے درمیان",
    "different" => "مختلف",
    "applications" => "ایپلیکیشنز",
    "intuitive" => "بدیہی",
    "powerful" => "طاقتور",
    "simplify" => "آسان بنائیں",
    "development" => "ترقی",
    "javascript" => "جاوا اسکرپٹ",
    "web" => "ویب",
    "interface" => "انٹرفیس",
    "interactive" => "انٹرایکٹو",
    "content" => "مواد",
    "create" => "بنائیں",
    "page" => "صفحہ",
    "user" => "صارف",
    "modern" => "جدید",
    "and" => "اور",
    "for" => "کے لیے",
    "with" => "کے ساتھ",
};

/// 词典句柄
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    entries: &'static phf::Map<&'static str, &'static str>,
}

impl Dictionary {
    /// 内置的乌尔都语词典
    pub fn urdu() -> Self {
        Self { entries: &URDU }
    }

    /// 按查询键查找译文，键必须已经是小写纯字母形式
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// 词条数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::urdu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let dict = Dictionary::urdu();
        assert_eq!(dict.lookup("react"), Some("ری ایکٹ"));
        assert_eq!(dict.lookup("library"), None);
        // 查询键大小写敏感，归一化由调用方负责
        assert_eq!(dict.lookup("React"), None);
    }

    #[test]
    fn test_keys_are_lowercase_letters() {
        let dict = Dictionary::urdu();
        assert!(dict.len() < 100);
        assert!(URDU
            .keys()
            .all(|k| !k.is_empty() && k.chars().all(|c| c.is_ascii_lowercase())));
    }
}
