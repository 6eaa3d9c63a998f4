//! Static park information shown by the info, SOS and FAQ menus.

use crate::i18n::Tr;

pub const ABOUT: Tr = Tr {
    kk: "ДЕНДРОСАЯБАҚ ТУРАЛЫ АҚПАРАТ\n\n\
         АТАУЫ: Асанбай Асқаров атындағы Шымкент дендросаябағы.\n\
         АШЫЛҒАН ЖЫЛЫ: 1979 жыл\n\
         ЖАЛПЫ КӨЛЕМІ: 117 га\n\
         Ағаштар саны 500 мыңнан астам. Шөптесін өсімдіктер саны 1 360 000.",
    ru: "ИНФОРМАЦИЯ О ДЕНДРОПАРКЕ\n\n\
         НАЗВАНИЕ: Шымкентский дендросад имени Асанбая Аскарова.\n\
         ОТКРЫТ: 1979 год\n\
         ПЛОЩАДЬ: 117 га\n\
         Деревьев более 500 000. Травянистых растений 1 360 000.",
    en: "ABOUT THE DENDRO PARK\n\n\
         NAME: Shymkent Dendro Park named after Asanbay Askarov.\n\
         OPENED: 1979\n\
         AREA: 117 ha\n\
         Over 500,000 trees and 1,360,000 herbaceous plants.",
};

pub const HOURS_AND_PRICE: Tr = Tr {
    kk: "Жұмыс уақыты: күн сайын 05:00 — 01:00\n\
         Билет: 100 ₸ (ардагерлерге, мүмкіндігі шектеулі жандарға, зейнеткерлерге, \
         көпбалалы отбасылар мен мектеп оқушыларына кіру тегін).",
    ru: "Время работы: ежедневно 05:00 — 01:00\n\
         Билет: 100 ₸ (вход бесплатный для ветеранов, людей с инвалидностью, \
         пенсионеров, многодетных семей и школьников).",
    en: "Opening hours: daily 05:00 — 01:00\n\
         Ticket: 100 KZT (free entry for veterans, people with disabilities, \
         pensioners, large families and schoolchildren).",
};

pub const ADDRESS_AND_TRANSPORT: Tr = Tr {
    kk: "Мекенжай: Шымкент қаласы, Байдібек би даңғылы, 108/10\n\
         Координаттар: 42.370540, 69.616596\n\n\
         Қоғамдық көлік: 16, 27, 65, 45, 147 автобустары («Дендросаябақ» немесе «Асқаров паркі» аялдамасы).",
    ru: "Адрес: г. Шымкент, пр. Байдибек би, 108/10\n\
         Координаты: 42.370540, 69.616596\n\n\
         Общественный транспорт: автобусы 16, 27, 65, 45, 147 (остановка «Дендросад» или «Парк Аскарова»).",
    en: "Address: Baydibek Bi Ave 108/10, Shymkent\n\
         Coordinates: 42.370540, 69.616596\n\n\
         Public transport: buses 16, 27, 65, 45, 147 (stop «Dendropark» or «Askarov Park»).",
};

pub const RULES: Tr = Tr {
    kk: "Дендросаябақта тәртіп сақтау ережелері:\n\n\
         • дәрілік шөптерді жинауға тыйым салынады;\n\
         • от жағуға тыйым салынады;\n\
         • ағаштарды қырқуға тыйым салынады;\n\
         • аң мен құсты аулауға тыйым салынады;\n\
         • балық ұстауға тыйым салынады;\n\
         • тамақ қалдықтары мен қоқысты қалдыруға болмайды.",
    ru: "Правила поведения в дендросаду:\n\n\
         • запрещено собирать лекарственные травы;\n\
         • запрещено разводить огонь;\n\
         • запрещено обрезать деревья;\n\
         • запрещено охотиться на животных и птиц;\n\
         • запрещено ловить рыбу;\n\
         • запрещено оставлять пищевые отходы и мусор.",
    en: "Park rules:\n\n\
         • do not collect medicinal herbs;\n\
         • do not light fires;\n\
         • do not cut trees;\n\
         • do not hunt animals or birds;\n\
         • do not fish;\n\
         • do not leave food waste or trash.",
};

pub const SOS: Tr = Tr {
    kk: "🚒 101 – Өрт сөндіру және құтқару қызметі\n\
         👮 102 – Полиция\n\
         🚑 103 – Жедел жәрдем\n\
         ⚡ 104 – Газ қызметі\n\
         💧 105 – Су арнасы\n\
         📞 109 – Бірыңғай байланыс орталығы\n\
         📡 112 – Бірыңғай төтенше жағдайлар қызметі",
    ru: "🚒 101 – Пожарная и спасательная служба\n\
         👮 102 – Полиция\n\
         🚑 103 – Скорая помощь\n\
         ⚡ 104 – Газовая служба\n\
         💧 105 – Водоканал\n\
         📞 109 – Единый контакт-центр\n\
         📡 112 – Единый номер экстренных служб",
    en: "🚒 101 – Fire and Rescue Service\n\
         👮 102 – Police\n\
         🚑 103 – Ambulance\n\
         ⚡ 104 – Gas service\n\
         💧 105 – Water utility\n\
         📞 109 – Unified contact center\n\
         📡 112 – Unified emergency number",
};

pub const FAQ: Tr = Tr {
    kk: "❓ Жиі қойылатын сұрақтар\n\
         • Парктің жұмыс уақыты: 05:00 — 01:00\n\
         • Билет: 100 ₸ (кейбір жеңілдіктер бар)\n\
         • Мекенжай: Шымкент, Байдібек би даңғылы, 108/10",
    ru: "❓ Часто задаваемые вопросы\n\
         • Время работы: 05:00 — 01:00\n\
         • Билет: 100 ₸ (есть льготы)\n\
         • Адрес: Шымкент, пр. Байдибек би, 108/10",
    en: "❓ Frequently asked questions\n\
         • Opening hours: 05:00 — 01:00\n\
         • Ticket: 100 KZT (discounts available)\n\
         • Address: Baydibek Bi Ave 108/10, Shymkent",
};

/// A point of interest with its own button, caption and photo.
pub struct Sight {
    pub number: usize,
    pub button: Tr,
    pub caption: Tr,
}

pub static SIGHTS: [Sight; 10] = [
    Sight {
        number: 1,
        button: Tr { kk: "🌿 1. Орталық аллея", ru: "🌿 1. Центральная аллея", en: "🌿 1. Central alley" },
        caption: Tr {
            kk: "🌿 1. Орталық аллея\n\nКіреберістен басталатын ұзын аллея бойында сәнді ағаштар мен гүлзарлар бар. \
                 Мұнда Асанбай Асқаровтың ескерткіші орнатылған.",
            ru: "🌿 1. Центральная аллея\n\nОт входа тянется длинная аллея с декоративными деревьями и цветниками. \
                 Здесь установлен памятник Асанбаю Аскарову.",
            en: "🌿 1. Central alley\n\nA long alley with ornamental trees and flowerbeds runs from the entrance. \
                 The monument to Asanbay Askarov stands here.",
        },
    },
    Sight {
        number: 2,
        button: Tr { kk: "🌸 2. Гүлзарлар", ru: "🌸 2. Цветники", en: "🌸 2. Flowerbeds" },
        caption: Tr {
            kk: "🌸 2. Гүлзарлар\n\nКөктем мен жазда раушан, қызғалдақ, бегония және лаванда гүлдейді.",
            ru: "🌸 2. Цветники\n\nВесной и летом цветут розы, тюльпаны, бегония и лаванда.",
            en: "🌸 2. Flowerbeds\n\nRoses, tulips, begonias and lavender bloom in spring and summer.",
        },
    },
    Sight {
        number: 3,
        button: Tr { kk: "🌲 3. Қылқан жапырақтылар", ru: "🌲 3. Аллея хвойных", en: "🌲 3. Conifer alley" },
        caption: Tr {
            kk: "🌲 3. Қылқан жапырақты ағаштар аллеясы\n\nАрша, шырша, қарағай және самырсын өседі.",
            ru: "🌲 3. Аллея хвойных\n\nЗдесь растут можжевельник, ель, сосна и пихта.",
            en: "🌲 3. Conifer alley\n\nJuniper, spruce, pine and fir grow here.",
        },
    },
    Sight {
        number: 4,
        button: Tr { kk: "🌳 4. Экзотикалық ағаштар", ru: "🌳 4. Экзотические деревья", en: "🌳 4. Exotic trees" },
        caption: Tr {
            kk: "🌳 4. Экзотикалық ағаштар\n\nИталия, Қытай, Корея және Кавказдан әкелінген ағаштар. \
                 Сиверс алмасы Қызыл кітапқа енген.",
            ru: "🌳 4. Экзотические деревья\n\nДеревья из Италии, Китая, Кореи и Кавказа. \
                 Яблоня Сиверса занесена в Красную книгу.",
            en: "🌳 4. Exotic trees\n\nTrees from Italy, China, Korea and the Caucasus. \
                 The Sievers apple is in the Red Book.",
        },
    },
    Sight {
        number: 5,
        button: Tr { kk: "🏞️ 5. Көл мен арналары", ru: "🏞️ 5. Озеро и каналы", en: "🏞️ 5. Pond and channels" },
        caption: Tr {
            kk: "🏞️ 5. Көл мен су арналары\n\nЖасанды көлде үйректер мен қаздар жүзеді.",
            ru: "🏞️ 5. Озеро и каналы\n\nНа искусственном пруду плавают утки и гуси.",
            en: "🏞️ 5. Pond and channels\n\nDucks and geese swim on the artificial pond.",
        },
    },
    Sight {
        number: 6,
        button: Tr { kk: "🚲 6. Веложолдар", ru: "🚲 6. Пешеходные и велодорожки", en: "🚲 6. Paths and bike lanes" },
        caption: Tr {
            kk: "🚲 6. Жаяу және веложолдар\n\nКешке жолдар шамдармен жарықтандырылады.",
            ru: "🚲 6. Пешеходные и велодорожки\n\nВечером дорожки подсвечиваются.",
            en: "🚲 6. Paths and bike lanes\n\nThe paths are lit in the evening.",
        },
    },
    Sight {
        number: 7,
        button: Tr { kk: "🕊️ 7. Демалыс аймақтары", ru: "🕊️ 7. Зоны отдыха", en: "🕊️ 7. Recreation areas" },
        caption: Tr {
            kk: "🕊️ 7. Демалыс аймақтары\n\nБалалар алаңдары, орындықтар және беседкалар.",
            ru: "🕊️ 7. Зоны отдыха\n\nДетские площадки, скамейки и беседки.",
            en: "🕊️ 7. Recreation areas\n\nPlaygrounds, benches and gazebos.",
        },
    },
    Sight {
        number: 8,
        button: Tr { kk: "📸 8. Фото-аймақтар", ru: "📸 8. Фотозоны", en: "📸 8. Photo spots" },
        caption: Tr {
            kk: "📸 8. Фото-аймақтар\n\nКөктем мен күзде гүл фестивальдері өтеді.",
            ru: "📸 8. Фотозоны\n\nВесной и осенью здесь проходят фестивали цветов.",
            en: "📸 8. Photo spots\n\nFlower festivals are held here in spring and autumn.",
        },
    },
    Sight {
        number: 9,
        button: Tr { kk: "🌺 9. Асқаров бұрышы", ru: "🌺 9. Уголок Асқарова", en: "🌺 9. Askarov corner" },
        caption: Tr {
            kk: "🌺 9. Асқаров бұрышы\n\nАсанбай Асқаровтың өмірі туралы стендтер.",
            ru: "🌺 9. Уголок Аскарова\n\nСтенды о жизни Асанбая Аскарова.",
            en: "🌺 9. Askarov corner\n\nBoards about the life of Asanbay Askarov.",
        },
    },
    Sight {
        number: 10,
        button: Tr { kk: "🌅 10. Күн бату көрінісі", ru: "🌅 10. Вид на закат", en: "🌅 10. Sunset view" },
        caption: Tr {
            kk: "🌅 10. Күн бату көрінісі\n\nКешке күн сәулесі ағаштарды алтын түске бояйды.",
            ru: "🌅 10. Вид на закат\n\nВечером солнце окрашивает деревья в золотой цвет.",
            en: "🌅 10. Sunset view\n\nIn the evening the sun paints the trees gold.",
        },
    },
];

/// Finds the sight whose button text, in any language, is `text`.
pub fn sight_by_button(text: &str) -> Option<&'static Sight> {
    SIGHTS.iter().find(|sight| sight.button.matches(text))
}

pub fn sight(number: usize) -> Option<&'static Sight> {
    SIGHTS.iter().find(|sight| sight.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;

    #[test]
    fn sights_are_numbered_in_order() {
        for (i, sight) in SIGHTS.iter().enumerate() {
            assert_eq!(sight.number, i + 1);
            assert!(sight.button.get(Lang::En).contains(&format!("{}.", i + 1)));
        }
    }

    #[test]
    fn sight_button_matches_any_language() {
        assert_eq!(sight_by_button("🌲 3. Аллея хвойных").map(|s| s.number), Some(3));
        assert_eq!(sight_by_button("🌲 3. Conifer alley").map(|s| s.number), Some(3));
        assert!(sight_by_button("3").is_none());
        assert_eq!(sight(10).map(|s| s.number), Some(10));
        assert!(sight(11).is_none());
    }
}
