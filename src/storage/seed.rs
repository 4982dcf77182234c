//! Built-in events shown before any backend data is available.

use crate::domain::Event;

/// Returns the built-in Folkline events, in display order.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new(1)
            .title("Hora Unirii")
            .description("Eveniment cultural în București")
            .country("RO")
            .image("https://picsum.photos/seed/ro1/400/300"),
        Event::new(2)
            .title("Festivalul Mărțișorului")
            .description("Tradiții și muzică populară")
            .country("RO")
            .image("https://picsum.photos/seed/ro2/400/300"),
        Event::new(3)
            .author("Ana Ionescu")
            .description("Dans popular în Cluj")
            .country("RO")
            .image("https://picsum.photos/seed/ro3/400/300")
            .location("Cluj-Napoca"),
        Event::new(4)
            .title("Carnaval Rio")
            .description("Cel mai mare carnaval din lume")
            .country("BR")
            .video("https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4"),
        Event::new(5)
            .author("Luiza Mendes")
            .description("Samba în favela")
            .country("BR")
            .image("https://picsum.photos/seed/br1/400/300")
            .location("Rio de Janeiro"),
        Event::new(6)
            .title("Sakura Festival")
            .description("Hanami în Tokyo")
            .country("JP")
            .image("https://picsum.photos/seed/jp1/400/300"),
        Event::new(7)
            .author("Yumi Sato")
            .description("Kimono traditional")
            .country("JP")
            .image("https://picsum.photos/seed/jp2/400/300")
            .location("Kyoto"),
        Event::new(8)
            .title("Oktoberfest")
            .description("Berea și tradițiile bavareze")
            .country("DE")
            .image("https://picsum.photos/seed/de1/400/300"),
        Event::new(9)
            .title("Día de los Muertos")
            .description("Sărbătoare tradițională")
            .country("MX")
            .video("https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4"),
        Event::new(10)
            .author("Kasia Nowak")
            .description("Pierogi și dansuri")
            .country("PL")
            .image("https://picsum.photos/seed/pl1/400/300")
            .location("Varșovia"),
    ]
}
