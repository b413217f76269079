//! Static name tables for both canons. Each entry lists the accepted
//! spellings for one chapter or book; lookup is by normalized name only.

/// Surah name spellings, indexed by zero-based chapter number. Entries must
/// stay lowercase-normalized for case-insensitive matching.
pub static QURAN_CHAPTERS: &[&[&str]] = &[
    &["الفاتحة"],
    &["البقرة"],
    &["ال عمران"],
    &["النساء"],
    &["المائدة"],
    &["الانعام"],
    &["الاعراف"],
    &["الانفال"],
    &["التوبة"],
    &["يونس"],
    &["هود"],
    &["يوسف"],
    &["الرعد"],
    &["ابراهيم"],
    &["الحجر"],
    &["النحل"],
    &["الاسراء"],
    &["الكهف"],
    &["مريم"],
    &["طه"],
    &["الانبياء", "الأنبياء"],
    &["الحج"],
    &["المؤمنون"],
    &["النور"],
    &["الفرقان"],
    &["الشعراء"],
    &["النمل"],
    &["القصص"],
    &["العنكبوت"],
    &["الروم"],
    &["لقمان"],
    &["السجدة"],
    &["الاحزاب"],
    &["سبأ"],
    &["فاطر"],
    &["يس"],
    &["الصافات"],
    &["ص"],
    &["الزمر"],
    &["غافر"],
    &["فصلت"],
    &["الشورى"],
    &["الزخرف"],
    &["الدخان"],
    &["الجاثية"],
    &["الاحقاف"],
    &["محمد"],
    &["الفتح"],
    &["الحجرات"],
    &["ق"],
    &["الذاريات"],
    &["الطور"],
    &["النجم"],
    &["القمر"],
    &["الرحمن"],
    &["الواقعة"],
    &["الحديد"],
    &["المجادلة"],
    &["الحشر"],
    &["الممتحنة"],
    &["الصف"],
    &["الجمعة"],
    &["المنافقون"],
    &["التغابن"],
    &["الطلاق"],
    &["التحريم"],
    &["الملك"],
    &["القلم"],
    &["الحاقة"],
    &["المعارج"],
    &["نوح"],
    &["الجن"],
    &["المزمل"],
    &["المدثر"],
    &["القيامة"],
    &["الانسان"],
    &["المرسلات"],
    &["النبا"],
    &["النازعات"],
    &["عبس"],
    &["التكوير"],
    &["الانفطار"],
    &["المطففين"],
    &["الانشقاق"],
    &["البروج"],
    &["الطارق"],
    &["الاعلى"],
    &["الغاشية"],
    &["الفجر"],
    &["البلد"],
    &["الشمس"],
    &["الليل"],
    &["الضحى"],
    &["الانشراح"],
    &["التين"],
    &["العلق"],
    &["القدر"],
    &["البينة"],
    &["الزلزلة"],
    &["العاديات"],
    &["القارعة"],
    &["التكاثر"],
    &["العصر"],
    &["الهمزة"],
    &["الفيل"],
    &["قريش"],
    &["الماعون"],
    &["الكوثر"],
    &["الكافرون"],
    &["النصر"],
    &["المسد"],
    &["الاخلاص"],
    &["الفلق"],
    &["الناس"],
];

/// One Bible book: the stable key used for coverage lookup and permalinks,
/// plus accepted spellings (full name first, then abbreviations).
pub struct BookEntry {
    pub key: &'static str,
    pub names: &'static [&'static str],
}

pub static BIBLE_BOOKS: &[BookEntry] = &[
    BookEntry { key: "genesis", names: &["genesis", "gen"] },
    BookEntry { key: "exodus", names: &["exodus", "exod", "ex"] },
    BookEntry { key: "leviticus", names: &["leviticus", "lev"] },
    BookEntry { key: "numbers", names: &["numbers", "num"] },
    BookEntry { key: "deuteronomy", names: &["deuteronomy", "deut"] },
    BookEntry { key: "joshua", names: &["joshua", "josh"] },
    BookEntry { key: "judges", names: &["judges", "judg"] },
    BookEntry { key: "ruth", names: &["ruth"] },
    BookEntry { key: "1-samuel", names: &["1 samuel", "1 sam", "i samuel"] },
    BookEntry { key: "2-samuel", names: &["2 samuel", "2 sam", "ii samuel"] },
    BookEntry { key: "1-kings", names: &["1 kings", "1 kgs", "i kings"] },
    BookEntry { key: "2-kings", names: &["2 kings", "2 kgs", "ii kings"] },
    BookEntry { key: "1-chronicles", names: &["1 chronicles", "1 chron", "1 chr"] },
    BookEntry { key: "2-chronicles", names: &["2 chronicles", "2 chron", "2 chr"] },
    BookEntry { key: "ezra", names: &["ezra"] },
    BookEntry { key: "nehemiah", names: &["nehemiah", "neh"] },
    BookEntry { key: "esther", names: &["esther", "esth"] },
    BookEntry { key: "job", names: &["job"] },
    BookEntry { key: "psalms", names: &["psalms", "psalm", "ps"] },
    BookEntry { key: "proverbs", names: &["proverbs", "prov"] },
    BookEntry { key: "ecclesiastes", names: &["ecclesiastes", "eccl"] },
    BookEntry { key: "song-of-solomon", names: &["song of solomon", "song of songs", "song"] },
    BookEntry { key: "isaiah", names: &["isaiah", "isa"] },
    BookEntry { key: "jeremiah", names: &["jeremiah", "jer"] },
    BookEntry { key: "lamentations", names: &["lamentations", "lam"] },
    BookEntry { key: "ezekiel", names: &["ezekiel", "ezek"] },
    BookEntry { key: "daniel", names: &["daniel", "dan"] },
    BookEntry { key: "hosea", names: &["hosea", "hos"] },
    BookEntry { key: "joel", names: &["joel"] },
    BookEntry { key: "amos", names: &["amos"] },
    BookEntry { key: "obadiah", names: &["obadiah", "obad"] },
    BookEntry { key: "jonah", names: &["jonah"] },
    BookEntry { key: "micah", names: &["micah", "mic"] },
    BookEntry { key: "nahum", names: &["nahum", "nah"] },
    BookEntry { key: "habakkuk", names: &["habakkuk", "hab"] },
    BookEntry { key: "zephaniah", names: &["zephaniah", "zeph"] },
    BookEntry { key: "haggai", names: &["haggai", "hag"] },
    BookEntry { key: "zechariah", names: &["zechariah", "zech"] },
    BookEntry { key: "malachi", names: &["malachi", "mal"] },
    BookEntry { key: "matthew", names: &["matthew", "matt", "mt"] },
    BookEntry { key: "mark", names: &["mark", "mk"] },
    BookEntry { key: "luke", names: &["luke", "lk"] },
    BookEntry { key: "john", names: &["john", "jn"] },
    BookEntry { key: "acts", names: &["acts"] },
    BookEntry { key: "romans", names: &["romans", "rom"] },
    BookEntry { key: "1-corinthians", names: &["1 corinthians", "1 cor", "i corinthians"] },
    BookEntry { key: "2-corinthians", names: &["2 corinthians", "2 cor", "ii corinthians"] },
    BookEntry { key: "galatians", names: &["galatians", "gal"] },
    BookEntry { key: "ephesians", names: &["ephesians", "eph"] },
    BookEntry { key: "philippians", names: &["philippians", "phil"] },
    BookEntry { key: "colossians", names: &["colossians", "col"] },
    BookEntry { key: "1-thessalonians", names: &["1 thessalonians", "1 thess"] },
    BookEntry { key: "2-thessalonians", names: &["2 thessalonians", "2 thess"] },
    BookEntry { key: "1-timothy", names: &["1 timothy", "1 tim"] },
    BookEntry { key: "2-timothy", names: &["2 timothy", "2 tim"] },
    BookEntry { key: "titus", names: &["titus"] },
    BookEntry { key: "philemon", names: &["philemon", "phlm"] },
    BookEntry { key: "hebrews", names: &["hebrews", "heb"] },
    BookEntry { key: "james", names: &["james", "jas"] },
    BookEntry { key: "1-peter", names: &["1 peter", "1 pet"] },
    BookEntry { key: "2-peter", names: &["2 peter", "2 pet"] },
    BookEntry { key: "1-john", names: &["1 john", "i john"] },
    BookEntry { key: "2-john", names: &["2 john", "ii john"] },
    BookEntry { key: "3-john", names: &["3 john", "iii john"] },
    BookEntry { key: "jude", names: &["jude"] },
    BookEntry { key: "revelation", names: &["revelation", "rev"] },
];

/// New Testament keys, used by the bundled default coverage tables.
pub static NEW_TESTAMENT: &[&str] = &[
    "matthew", "mark", "luke", "john", "acts", "romans", "1-corinthians",
    "2-corinthians", "galatians", "ephesians", "philippians", "colossians",
    "1-thessalonians", "2-thessalonians", "1-timothy", "2-timothy", "titus",
    "philemon", "hebrews", "james", "1-peter", "2-peter", "1-john", "2-john",
    "3-john", "jude", "revelation",
];

/// Torah keys, used by the bundled default coverage tables.
pub static TORAH: &[&str] = &["genesis", "exodus", "leviticus", "numbers", "deuteronomy"];

/// Normalizes a name as written in prose for table lookup: lowercased,
/// trimmed, inner whitespace collapsed to single spaces.
pub fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Looks up a surah name and returns its 1-based chapter number.
pub fn quran_chapter_number(name: &str) -> Option<u32> {
    let wanted = normalize(name);
    QURAN_CHAPTERS.iter().position(|names| {
        names.iter().any(|candidate| normalize(candidate) == wanted)
    }).map(|idx| idx as u32 + 1)
}

/// Looks up a book name or abbreviation and returns the stable book key.
pub fn bible_book_key(name: &str) -> Option<&'static str> {
    let wanted = normalize(name);
    BIBLE_BOOKS.iter().find_map(|entry| {
        entry
            .names
            .iter()
            .any(|candidate| normalize(candidate) == wanted)
            .then_some(entry.key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quran_table_has_all_chapters() {
        assert_eq!(QURAN_CHAPTERS.len(), 114);
    }

    #[test]
    fn test_bible_table_has_all_books() {
        assert_eq!(BIBLE_BOOKS.len(), 66);
    }

    #[test]
    fn test_quran_chapter_lookup_with_synonym() {
        assert_eq!(quran_chapter_number("البقرة"), Some(2));
        assert_eq!(quran_chapter_number("الأنبياء"), Some(21));
        assert_eq!(quran_chapter_number("الانبياء"), Some(21));
    }

    #[test]
    fn test_bible_book_lookup_ignores_case_and_spacing() {
        assert_eq!(bible_book_key("John"), Some("john"));
        assert_eq!(bible_book_key("1  Corinthians"), Some("1-corinthians"));
        assert_eq!(bible_book_key("1 Cor"), Some("1-corinthians"));
    }

    #[test]
    fn test_unknown_names_return_none() {
        assert_eq!(quran_chapter_number("not a surah"), None);
        assert_eq!(bible_book_key("narnia"), None);
    }
}
