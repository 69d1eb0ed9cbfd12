//! Designs shipped with the service

use once_cell::sync::Lazy;

use crate::domain::{Complexity, Design};

static BUILTIN: Lazy<Vec<Design>> = Lazy::new(|| {
    vec![
        design(
            "unicornio-magico",
            "Unicórnio Mágico",
            "Um unicórnio saltando sobre um arco-íris entre nuvens e estrelas.",
            "Fantasia",
            &["unicórnio", "arco-íris", "estrelas"],
            Complexity::Easy,
        ),
        design(
            "dragao-amigo",
            "Dragão Amigo",
            "Um dragão sorridente guardando um castelo com torres e bandeiras.",
            "Fantasia",
            &["dragão", "castelo", "aventura"],
            Complexity::Hard,
        ),
        design(
            "gatinho-brincalhao",
            "Gatinho Brincalhão",
            "Um filhote de gato brincando com um novelo de lã.",
            "Animais",
            &["gato", "filhote", "novelo"],
            Complexity::Easy,
        ),
        design(
            "fundo-do-mar",
            "Fundo do Mar",
            "Peixes, corais e uma tartaruga explorando o oceano.",
            "Animais",
            &["peixe", "tartaruga", "oceano", "corais"],
            Complexity::Medium,
        ),
        design(
            "foguete-espacial",
            "Foguete Espacial",
            "Um foguete decolando rumo a planetas e cometas.",
            "Espaço",
            &["foguete", "planetas", "astronauta"],
            Complexity::Medium,
        ),
        design(
            "mandala-floral",
            "Mandala Floral",
            "Mandala simétrica com pétalas e padrões geométricos detalhados.",
            "Mandalas",
            &["mandala", "flores", "relaxamento"],
            Complexity::Hard,
        ),
        design(
            "fazendinha",
            "Fazendinha",
            "Celeiro, vaca, galinha e porquinho em um dia de sol.",
            "Animais",
            &["fazenda", "vaca", "galinha", "porco"],
            Complexity::Easy,
        ),
        design(
            "princesa-no-jardim",
            "Princesa no Jardim",
            "Uma princesa regando flores em um jardim encantado.",
            "Fantasia",
            &["princesa", "jardim", "flores"],
            Complexity::Medium,
        ),
    ]
});

fn design(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    complexity: Complexity,
) -> Design {
    Design {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("/designs/{}.png", id),
        description: description.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        complexity,
    }
}

pub fn builtin_designs() -> &'static [Design] {
    &BUILTIN
}
