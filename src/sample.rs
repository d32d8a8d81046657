//! Built-in contact list used when no data file is configured

use crate::model::SectionMap;

const CONTACTS: &[&str] = &[
    "Aaliyah Brooks", "Abel Ortiz", "Ada Lovelace", "Adrian Hale", "Amara Okafor", "Anton Weber",
    "Beatrice Moss", "Benedikt Kraus", "Bianca Rossi", "Boris Petrov",
    "Camille Laurent", "Carlos Mendes", "Chen Wei", "Clara Jensen", "Cyrus Farahani",
    "Dalia Haddad", "Daniel Kim", "Dmitri Sokolov",
    "Elena Popescu", "Elias Berg", "Emeka Nwosu",
    "Farah Siddiqui", "Felix Novak",
    "Gabriel Souza", "Grace Hopper", "Greta Lindqvist",
    "Hana Suzuki", "Hugo Martin",
    "Imani Mwangi", "Ingrid Olsen", "Isaac Cohen",
    "Jonas Schmidt", "Julia Santos",
    "Kai Nakamura", "Karim Benali", "Katarina Horvat",
    "Leila Ahmadi", "Liam O'Connor", "Lucia Fernandez",
    "Maya Patel", "Mateo Garcia", "Mei Lin", "Mikael Virtanen",
    "Nadia Rahman", "Niko Laine",
    "Olga Ivanova", "Omar Khalil",
    "Paulo Costa", "Priya Sharma",
    "Rafael Torres", "Rosa Delgado", "Ruth Asante",
    "Samir Aziz", "Sofia Conti", "Stefan Nowak",
    "Tariq Hussain", "Tomas Dvorak",
    "Valentina Greco", "Viktor Hansen",
    "Wen Zhao", "Wiebke Meyer",
    "Yara Haddad", "Yusuf Demir",
    "Zainab Bello", "Zoe Clarke",
];

/// Contacts grouped by first letter, one section per letter A-Z
///
/// Letters without contacts are kept as empty sections, so the navigator shows
/// them as inactive.
pub fn contacts() -> SectionMap<String> {
    ('A'..='Z')
        .map(|letter| {
            let names = CONTACTS
                .iter()
                .filter(|name| name.starts_with(letter))
                .map(|name| name.to_string())
                .collect();
            (letter.to_string(), names)
        })
        .collect()
}
