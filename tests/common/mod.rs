//! Common test records shared across the integration suites.

use mrrc_extract::{Field, Record};

/// Builds a data field from `(code, value)` pairs.
pub fn field(tag: &str, ind1: char, ind2: char, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag.to_string(), ind1, ind2);
    for (code, value) in subfields {
        field.add_subfield_str(*code, value);
    }
    field
}

/// A Japanese monograph with a linked 880 title and local 9xx fields.
///
/// Field order: 041, 245, 880 (linked to 245), 260, 610, 650, 710, 901,
/// 903, 909, 998.
#[allow(dead_code)]
pub fn yasukuni_record() -> Record {
    Record::builder()
        .leader("01234cam a2200289 a 4500")
        .control_field_str("001", "558505")
        .control_field_str("008", "871002s1986    ja a         f00000 jpn  ")
        .field(field("041", '0', ' ', &[('a', "jpn")]))
        .field(field(
            "245",
            '1',
            '0',
            &[
                ('6', "880-01"),
                ('a', "Yasukuni Jinja :"),
                ('b', "saiten to gyōji no subete /"),
                ('c', "[henshū Yasukuni Jinja Shamusho]."),
            ],
        ))
        .field(field(
            "880",
            '1',
            '0',
            &[
                ('6', "245-01/$1"),
                ('a', "靖國神社 :"),
                ('b', "祭典と行事のすべて /"),
                ('c', "[靖國神社社務所編集]."),
            ],
        ))
        .field(field(
            "260",
            ' ',
            ' ',
            &[
                ('a', "Tōkyō :"),
                ('b', "Yasukuni Jinja Shamusho,"),
                ('c', "1986."),
            ],
        ))
        .field(field(
            "610",
            '2',
            '0',
            &[
                ('a', "Yasukuni Jinja (Tokyo, Japan)"),
                ('x', "Rites and ceremonies."),
            ],
        ))
        .field(field(
            "650",
            ' ',
            '0',
            &[('a', "Shinto shrines"), ('z', "Japan"), ('z', "Tokyo.")],
        ))
        .field(field(
            "710",
            '2',
            ' ',
            &[('a', "Yasukuni Jinja (Tokyo, Japan)."), ('b', "Shamusho.")],
        ))
        .field(field("901", ' ', ' ', &[('a', "BL2225"), ('b', "T6")]))
        .field(field(
            "903",
            ' ',
            ' ',
            &[('a', "Sterling Memorial Library"), ('b', "Stacks")],
        ))
        .field(field("909", ' ', ' ', &[('a', "2002-06-01T00:00:00.000Z")]))
        .field(field("998", ' ', ' ', &[('a', "10/02/87"), ('b', "EAT")]))
        .build()
}

/// An English monograph with author, title and imprint fields.
#[allow(dead_code)]
pub fn manufacturing_consent_record() -> Record {
    Record::builder()
        .leader("01234cam a2200289 a 4500")
        .control_field_str("001", "12345678")
        .control_field_str("008", "010831s2002    nyu      b    001 0 eng  ")
        .field(field("010", ' ', ' ', &[('a', "  2001050014")]))
        .field(field("020", ' ', ' ', &[('a', "0375714499 (pbk.)")]))
        .field(field("100", '1', ' ', &[('a', "Herman, Edward S.")]))
        .field(field(
            "245",
            '1',
            '0',
            &[
                ('a', "Manufacturing consent :"),
                ('b', "the political economy of the mass media /"),
                (
                    'c',
                    "Edward S. Herman and Noam Chomsky ; with a new introduction by the authors.",
                ),
            ],
        ))
        .field(field(
            "260",
            ' ',
            ' ',
            &[('a', "New York :"), ('b', "Pantheon Books,"), ('c', "c2002.")],
        ))
        .field(field(
            "650",
            ' ',
            '0',
            &[
                ('a', "Mass media"),
                ('x', "Political aspects"),
                ('z', "United States."),
            ],
        ))
        .field(field(
            "650",
            ' ',
            '0',
            &[
                ('a', "Mass media"),
                ('x', "Political aspects"),
                ('z', "United States."),
            ],
        ))
        .field(field("700", '1', ' ', &[('a', "Chomsky, Noam.")]))
        .build()
}

/// A record whose title starts with a four character article.
#[allow(dead_code)]
pub fn title_the_record() -> Record {
    Record::builder()
        .control_field_str("001", "15572040")
        .control_field_str("008", "191223s2019    miu     o      00 0 eng d")
        .field(field(
            "100",
            '1',
            ' ',
            &[('a', "Test, Author,"), ('e', "author.")],
        ))
        .field(field(
            "245",
            '1',
            '4',
            &[('a', "The Test Record /"), ('c', "Author Test.")],
        ))
        .field(field(
            "264",
            ' ',
            '1',
            &[('a', "Ann Arbor :"), ('b', "Test Press,")],
        ))
        .build()
}

/// [`title_the_record`] with the given 008 and publication dates.
///
/// Empty strings still set the subfield, leaving an empty `$c`.
#[allow(dead_code)]
pub fn date_record(fixed_008: &str, c264: &str, c260: &str) -> Record {
    let mut record = title_the_record();
    record.add_control_field_str("008", fixed_008);
    record.set_subfield("264", 'c', c264);
    record.set_subfield("260", 'c', c260);
    record
}
