//! 5 × 7 glyph rows: printable ASCII, one blank slot, CP1251 А..я, Ё, ё.

#[rustfmt::skip]
pub(super) static DATA: [u16; 162 * 7] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x0000, 0x2000, // !
    0x5000, 0x5000, 0x5000, 0x0000, 0x0000, 0x0000, 0x0000, // "
    0x5000, 0x5000, 0xF800, 0x5000, 0xF800, 0x5000, 0x5000, // #
    0x2000, 0x7800, 0xA000, 0x7000, 0x2800, 0xF000, 0x2000, // $
    0xC000, 0xC800, 0x1000, 0x2000, 0x4000, 0x9800, 0x1800, // %
    0x6000, 0x9000, 0xA000, 0x4000, 0xA800, 0x9000, 0x6800, // &
    0x6000, 0x2000, 0x4000, 0x0000, 0x0000, 0x0000, 0x0000, // '
    0x1000, 0x2000, 0x4000, 0x4000, 0x4000, 0x2000, 0x1000, // (
    0x4000, 0x2000, 0x1000, 0x1000, 0x1000, 0x2000, 0x4000, // )
    0x0000, 0x5000, 0x2000, 0xF800, 0x2000, 0x5000, 0x0000, // *
    0x0000, 0x2000, 0x2000, 0xF800, 0x2000, 0x2000, 0x0000, // +
    0x0000, 0x0000, 0x0000, 0x0000, 0x6000, 0x2000, 0x4000, // ,
    0x0000, 0x0000, 0x0000, 0xF800, 0x0000, 0x0000, 0x0000, // -
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6000, 0x6000, // .
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0x0000, // /
    0x7000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, 0x7000, // 0
    0x2000, 0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, // 1
    0x7000, 0x8800, 0x0800, 0x1000, 0x2000, 0x4000, 0xF800, // 2
    0xF800, 0x1000, 0x2000, 0x1000, 0x0800, 0x8800, 0x7000, // 3
    0x1000, 0x3000, 0x5000, 0x9000, 0xF800, 0x1000, 0x1000, // 4
    0xF800, 0x8000, 0xF000, 0x0800, 0x0800, 0x8800, 0x7000, // 5
    0x3000, 0x4000, 0x8000, 0xF000, 0x8800, 0x8800, 0x7000, // 6
    0xF800, 0x0800, 0x1000, 0x2000, 0x4000, 0x4000, 0x4000, // 7
    0x7000, 0x8800, 0x8800, 0x7000, 0x8800, 0x8800, 0x7000, // 8
    0x7000, 0x8800, 0x8800, 0x7800, 0x0800, 0x1000, 0x6000, // 9
    0x0000, 0x6000, 0x6000, 0x0000, 0x6000, 0x6000, 0x0000, // :
    0x0000, 0x6000, 0x6000, 0x0000, 0x6000, 0x2000, 0x4000, // ;
    0x1000, 0x2000, 0x4000, 0x8000, 0x4000, 0x2000, 0x1000, // <
    0x0000, 0x0000, 0xF800, 0x0000, 0xF800, 0x0000, 0x0000, // =
    0x4000, 0x2000, 0x1000, 0x0800, 0x1000, 0x2000, 0x4000, // >
    0x7000, 0x8800, 0x0800, 0x1000, 0x2000, 0x0000, 0x2000, // ?
    0x7000, 0x8800, 0x0800, 0x6800, 0xA800, 0xA800, 0x7000, // @
    0x7000, 0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, // A
    0xF000, 0x8800, 0x8800, 0xF000, 0x8800, 0x8800, 0xF000, // B
    0x7000, 0x8800, 0x8000, 0x8000, 0x8000, 0x8800, 0x7000, // C
    0xE000, 0x9000, 0x8800, 0x8800, 0x8800, 0x9000, 0xE000, // D
    0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0xF800, // E
    0xF800, 0x8000, 0x8000, 0xE000, 0x8000, 0x8000, 0x8000, // F
    0x7000, 0x8800, 0x8000, 0x8000, 0x9800, 0x8800, 0x7000, // G
    0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x8800, // H
    0x7000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, // I
    0x3800, 0x1000, 0x1000, 0x1000, 0x1000, 0x9000, 0x6000, // J
    0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, // K
    0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0xF800, // L
    0x8800, 0xD800, 0xA800, 0x8800, 0x8800, 0x8800, 0x8800, // M
    0x8800, 0x8800, 0xC800, 0xA800, 0x9800, 0x8800, 0x8800, // N
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, // O
    0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, // P
    0x7000, 0x8800, 0x8800, 0x8800, 0xA800, 0x9000, 0x6800, // Q
    0xF000, 0x8800, 0x8800, 0xF000, 0xA000, 0x9000, 0x8800, // R
    0x7800, 0x8000, 0x8000, 0x7000, 0x0800, 0x0800, 0xF000, // S
    0xF800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, // T
    0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, // U
    0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, // V
    0x8800, 0x8800, 0x8800, 0xA800, 0xA800, 0xD800, 0x8800, // W
    0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, // X
    0x8800, 0x8800, 0x5000, 0x2000, 0x2000, 0x2000, 0x2000, // Y
    0xF800, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0xF800, // Z
    0x7000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x7000, // [
    0x0000, 0x8000, 0x4000, 0x2000, 0x1000, 0x0800, 0x0000, // backslash
    0x7000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x7000, // ]
    0x2000, 0x5000, 0x8800, 0x0000, 0x0000, 0x0000, 0x0000, // ^
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0xF800, // _
    0x4000, 0x2000, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, // `
    0x0000, 0x0000, 0x7000, 0x0800, 0x7800, 0x8800, 0x7800, // a
    0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0xF000, // b
    0x0000, 0x0000, 0x7000, 0x8000, 0x8000, 0x8800, 0x7000, // c
    0x0800, 0x0800, 0x6800, 0x9800, 0x8800, 0x8800, 0x7800, // d
    0x0000, 0x0000, 0x7000, 0x8800, 0xF800, 0x8000, 0x7000, // e
    0x3000, 0x4800, 0x4000, 0xE000, 0x4000, 0x4000, 0x4000, // f
    0x0000, 0x0000, 0x7800, 0x8800, 0x7800, 0x0800, 0x3000, // g
    0x8000, 0x8000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, // h
    0x2000, 0x0000, 0x6000, 0x2000, 0x2000, 0x2000, 0x7000, // i
    0x1000, 0x0000, 0x3000, 0x1000, 0x1000, 0x9000, 0x6000, // j
    0x4000, 0x4000, 0x4800, 0x5000, 0x6000, 0x5000, 0x4800, // k
    0x6000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, // l
    0x0000, 0x0000, 0xD000, 0xA800, 0xA800, 0x8800, 0x8800, // m
    0x0000, 0x0000, 0xB000, 0xC800, 0x8800, 0x8800, 0x8800, // n
    0x0000, 0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x7000, // o
    0x0000, 0x0000, 0xF000, 0x8800, 0xF000, 0x8000, 0x8000, // p
    0x0000, 0x0000, 0x6800, 0x9800, 0x7800, 0x0800, 0x0800, // q
    0x0000, 0x0000, 0xB000, 0xC800, 0x8000, 0x8000, 0x8000, // r
    0x0000, 0x0000, 0x7000, 0x8000, 0x7000, 0x0800, 0xF000, // s
    0x4000, 0x4000, 0xE000, 0x4000, 0x4000, 0x4800, 0x3000, // t
    0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x9800, 0x6800, // u
    0x0000, 0x0000, 0x8800, 0x8800, 0x8800, 0x5000, 0x2000, // v
    0x0000, 0x0000, 0x8800, 0x8800, 0xA800, 0xA800, 0x5000, // w
    0x0000, 0x0000, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, // x
    0x0000, 0x0000, 0x8800, 0x8800, 0x7800, 0x0800, 0x7000, // y
    0x0000, 0x0000, 0xF800, 0x1000, 0x2000, 0x4000, 0xF800, // z
    0x1000, 0x2000, 0x2000, 0x4000, 0x2000, 0x2000, 0x1000, // {
    0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, // |
    0x4000, 0x2000, 0x2000, 0x1000, 0x2000, 0x2000, 0x4000, // }
    0x4000, 0xA800, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, // ~
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // (unused)
    0x7000, 0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, // А
    0xF800, 0x8000, 0x8000, 0xF000, 0x8800, 0x8800, 0xF000, // Б
    0xF000, 0x8800, 0x8800, 0xF000, 0x8800, 0x8800, 0xF000, // В
    0xF800, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, // Г
    0x7000, 0x5000, 0x5000, 0x5000, 0x5000, 0xF800, 0x8800, // Д
    0xF800, 0x8000, 0x8000, 0xF000, 0x8000, 0x8000, 0xF800, // Е
    0xA800, 0xA800, 0x7000, 0x2000, 0x7000, 0xA800, 0xA800, // Ж
    0x7000, 0x8800, 0x0800, 0x3000, 0x0800, 0x8800, 0x7000, // З
    0x8800, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, 0x8800, // И
    0x5000, 0x2000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, // Й
    0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, // К
    0x3800, 0x4800, 0x4800, 0x4800, 0x4800, 0x4800, 0x8800, // Л
    0x8800, 0xD800, 0xA800, 0x8800, 0x8800, 0x8800, 0x8800, // М
    0x8800, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, 0x8800, // Н
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, // О
    0xF800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, // П
    0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, // Р
    0x7000, 0x8800, 0x8000, 0x8000, 0x8000, 0x8800, 0x7000, // С
    0xF800, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, // Т
    0x8800, 0x8800, 0x8800, 0x7800, 0x0800, 0x8800, 0x7000, // У
    0x2000, 0x7000, 0xA800, 0xA800, 0x7000, 0x2000, 0x2000, // Ф
    0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, // Х
    0x9000, 0x9000, 0x9000, 0x9000, 0x9000, 0xF800, 0x0800, // Ц
    0x8800, 0x8800, 0x8800, 0x7800, 0x0800, 0x0800, 0x0800, // Ч
    0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xF800, // Ш
    0xA800, 0xA800, 0xA800, 0xA800, 0xA800, 0xF800, 0x0800, // Щ
    0xC000, 0x4000, 0x4000, 0x7000, 0x4800, 0x4800, 0x7000, // Ъ
    0x8800, 0x8800, 0x8800, 0xC800, 0xA800, 0xA800, 0xC800, // Ы
    0x8000, 0x8000, 0x8000, 0xF000, 0x8800, 0x8800, 0xF000, // Ь
    0x7000, 0x8800, 0x0800, 0x3800, 0x0800, 0x8800, 0x7000, // Э
    0x9000, 0xA800, 0xA800, 0xE800, 0xA800, 0xA800, 0x9000, // Ю
    0x7800, 0x8800, 0x8800, 0x7800, 0x2800, 0x4800, 0x8800, // Я
    0x0000, 0x0000, 0x7000, 0x0800, 0x7800, 0x8800, 0x7800, // а
    0x3800, 0x4000, 0x8000, 0xF000, 0x8800, 0x8800, 0x7000, // б
    0x0000, 0x0000, 0xF000, 0x8800, 0xF000, 0x8800, 0xF000, // в
    0x0000, 0x0000, 0xF800, 0x8000, 0x8000, 0x8000, 0x8000, // г
    0x0000, 0x0000, 0x7000, 0x5000, 0x5000, 0xF800, 0x8800, // д
    0x0000, 0x0000, 0x7000, 0x8800, 0xF800, 0x8000, 0x7000, // е
    0x0000, 0x0000, 0xA800, 0x7000, 0x2000, 0x7000, 0xA800, // ж
    0x0000, 0x0000, 0x7000, 0x8800, 0x3000, 0x8800, 0x7000, // з
    0x0000, 0x0000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, // и
    0x5000, 0x2000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, // й
    0x0000, 0x0000, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, // к
    0x0000, 0x0000, 0x3800, 0x4800, 0x4800, 0x4800, 0x8800, // л
    0x0000, 0x0000, 0x8800, 0xD800, 0xA800, 0x8800, 0x8800, // м
    0x0000, 0x0000, 0x8800, 0x8800, 0xF800, 0x8800, 0x8800, // н
    0x0000, 0x0000, 0x7000, 0x8800, 0x8800, 0x8800, 0x7000, // о
    0x0000, 0x0000, 0xF800, 0x8800, 0x8800, 0x8800, 0x8800, // п
    0x0000, 0x0000, 0xF000, 0x8800, 0xF000, 0x8000, 0x8000, // р
    0x0000, 0x0000, 0x7000, 0x8000, 0x8000, 0x8800, 0x7000, // с
    0x0000, 0x0000, 0xF800, 0x2000, 0x2000, 0x2000, 0x2000, // т
    0x0000, 0x0000, 0x8800, 0x8800, 0x7800, 0x0800, 0x7000, // у
    0x2000, 0x2000, 0x7000, 0xA800, 0xA800, 0x7000, 0x2000, // ф
    0x0000, 0x0000, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, // х
    0x0000, 0x0000, 0x9000, 0x9000, 0x9000, 0xF800, 0x0800, // ц
    0x0000, 0x0000, 0x8800, 0x8800, 0x7800, 0x0800, 0x0800, // ч
    0x0000, 0x0000, 0xA800, 0xA800, 0xA800, 0xA800, 0xF800, // ш
    0x0000, 0x0000, 0xA800, 0xA800, 0xA800, 0xF800, 0x0800, // щ
    0x0000, 0x0000, 0xC000, 0x4000, 0x7000, 0x4800, 0x7000, // ъ
    0x0000, 0x0000, 0x8800, 0x8800, 0xC800, 0xA800, 0xC800, // ы
    0x0000, 0x0000, 0x8000, 0x8000, 0xF000, 0x8800, 0xF000, // ь
    0x0000, 0x0000, 0x7000, 0x8800, 0x3800, 0x8800, 0x7000, // э
    0x0000, 0x0000, 0x9000, 0xA800, 0xE800, 0xA800, 0x9000, // ю
    0x0000, 0x0000, 0x7800, 0x8800, 0x7800, 0x4800, 0x8800, // я
    0x5000, 0x0000, 0xF800, 0x8000, 0xF000, 0x8000, 0xF800, // Ё
    0x5000, 0x0000, 0x7000, 0x8800, 0xF800, 0x8000, 0x7000, // ё
];
