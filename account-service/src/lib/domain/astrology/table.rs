use super::models::ZodiacAnimal;

/// One lunar-year span assigned to a single animal.
///
/// Boundaries are stored as (year, month, day) triples and compared
/// field-wise, so entries never require calendar arithmetic.
pub(super) struct ZodiacRange {
    pub animal: ZodiacAnimal,
    pub start: (i32, u32, u32),
    pub end: (i32, u32, u32),
}

impl ZodiacRange {
    const fn new(animal: ZodiacAnimal, start: (i32, u32, u32), end: (i32, u32, u32)) -> Self {
        Self { animal, start, end }
    }
}

/// Lunar new year boundaries from 1912 through the 2023 lunar year.
///
/// Lunar new year dates shift yearly, so the animal cannot be computed from
/// month/day alone; this precomputed table is the practical substitute for an
/// astronomical lunar-calendar calculation. Entries are scanned in order and
/// the first match wins, which resolves the Rat/Ox overlap on 2021-01-24 in
/// favour of Rat.
pub(super) const ZODIAC_RANGES: [ZodiacRange; 112] = [
    ZodiacRange::new(ZodiacAnimal::Rat, (1912, 2, 18), (1913, 2, 5)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1913, 2, 6), (1914, 1, 25)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1914, 1, 26), (1915, 2, 13)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1915, 2, 14), (1916, 2, 2)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1916, 2, 3), (1917, 1, 22)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1917, 1, 23), (1918, 2, 10)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1918, 2, 11), (1919, 1, 31)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1919, 2, 1), (1920, 2, 19)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1920, 2, 20), (1921, 2, 7)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1921, 2, 8), (1922, 1, 27)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1922, 1, 28), (1923, 2, 15)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1923, 2, 16), (1924, 2, 4)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1924, 2, 5), (1925, 1, 24)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1925, 1, 25), (1926, 2, 12)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1926, 2, 13), (1927, 2, 1)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1927, 2, 2), (1928, 1, 22)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1928, 1, 23), (1929, 2, 9)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1929, 2, 10), (1930, 1, 29)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1930, 1, 30), (1931, 2, 16)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1931, 2, 17), (1932, 2, 5)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1932, 2, 6), (1933, 1, 25)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1933, 1, 26), (1934, 2, 13)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1934, 2, 14), (1935, 2, 3)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1935, 2, 4), (1936, 1, 23)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1936, 1, 24), (1937, 2, 10)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1937, 2, 11), (1938, 1, 30)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1938, 1, 31), (1939, 2, 18)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1939, 2, 19), (1940, 2, 7)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1940, 2, 8), (1941, 1, 26)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1941, 1, 27), (1942, 2, 14)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1942, 2, 15), (1943, 2, 4)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1943, 2, 5), (1944, 1, 24)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1944, 1, 25), (1945, 2, 12)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1945, 2, 13), (1946, 2, 1)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1946, 2, 2), (1947, 1, 21)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1947, 1, 22), (1948, 2, 9)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1948, 2, 10), (1949, 1, 28)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1949, 1, 29), (1950, 2, 16)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1950, 2, 17), (1951, 2, 5)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1951, 2, 6), (1952, 1, 26)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1952, 1, 27), (1953, 2, 13)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1953, 2, 14), (1954, 2, 2)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1954, 2, 3), (1955, 1, 23)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1955, 1, 24), (1956, 2, 11)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1956, 2, 12), (1957, 1, 30)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1957, 1, 31), (1958, 2, 17)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1958, 2, 18), (1959, 2, 7)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1959, 2, 8), (1960, 1, 27)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1960, 1, 28), (1961, 2, 14)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1961, 2, 15), (1962, 2, 4)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1962, 2, 5), (1963, 1, 24)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1963, 1, 25), (1964, 2, 12)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1964, 2, 13), (1965, 2, 1)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1965, 2, 2), (1966, 1, 20)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1966, 1, 21), (1967, 2, 8)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1967, 2, 9), (1968, 1, 29)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1968, 1, 30), (1969, 2, 16)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1969, 2, 17), (1970, 2, 5)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1970, 2, 6), (1971, 1, 26)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1971, 1, 27), (1972, 2, 14)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1972, 2, 15), (1973, 2, 2)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1973, 2, 3), (1974, 1, 22)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1974, 1, 23), (1975, 2, 10)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1975, 2, 11), (1976, 1, 30)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1976, 1, 31), (1977, 2, 17)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1977, 2, 18), (1978, 2, 6)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1978, 2, 7), (1979, 1, 27)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1979, 1, 28), (1980, 2, 15)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1980, 2, 16), (1981, 2, 4)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1981, 2, 5), (1982, 1, 24)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1982, 1, 25), (1983, 2, 12)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1983, 2, 13), (1984, 2, 1)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1984, 2, 2), (1985, 2, 19)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1985, 2, 20), (1986, 2, 8)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1986, 2, 9), (1987, 1, 28)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1987, 1, 29), (1988, 2, 16)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (1988, 2, 17), (1989, 2, 5)),
    ZodiacRange::new(ZodiacAnimal::Snake, (1989, 2, 6), (1990, 1, 26)),
    ZodiacRange::new(ZodiacAnimal::Horse, (1990, 1, 27), (1991, 2, 14)),
    ZodiacRange::new(ZodiacAnimal::Goat, (1991, 2, 15), (1992, 2, 3)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (1992, 2, 4), (1993, 1, 22)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (1993, 1, 23), (1994, 2, 9)),
    ZodiacRange::new(ZodiacAnimal::Dog, (1994, 2, 10), (1995, 1, 30)),
    ZodiacRange::new(ZodiacAnimal::Pig, (1995, 1, 31), (1996, 2, 18)),
    ZodiacRange::new(ZodiacAnimal::Rat, (1996, 2, 19), (1997, 2, 6)),
    ZodiacRange::new(ZodiacAnimal::Ox, (1997, 2, 7), (1998, 1, 27)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (1998, 1, 28), (1999, 2, 15)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (1999, 2, 16), (2000, 2, 4)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (2000, 2, 5), (2001, 1, 23)),
    ZodiacRange::new(ZodiacAnimal::Snake, (2001, 1, 24), (2002, 2, 11)),
    ZodiacRange::new(ZodiacAnimal::Horse, (2002, 2, 12), (2003, 1, 31)),
    ZodiacRange::new(ZodiacAnimal::Goat, (2003, 2, 1), (2004, 1, 21)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (2004, 1, 22), (2005, 2, 8)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (2005, 2, 9), (2006, 1, 28)),
    ZodiacRange::new(ZodiacAnimal::Dog, (2006, 1, 29), (2007, 2, 17)),
    ZodiacRange::new(ZodiacAnimal::Pig, (2007, 2, 18), (2008, 2, 6)),
    ZodiacRange::new(ZodiacAnimal::Rat, (2008, 2, 7), (2009, 1, 25)),
    ZodiacRange::new(ZodiacAnimal::Ox, (2009, 1, 26), (2010, 2, 13)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (2010, 2, 14), (2011, 2, 2)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (2011, 2, 3), (2012, 1, 22)),
    ZodiacRange::new(ZodiacAnimal::Dragon, (2012, 1, 23), (2013, 2, 9)),
    ZodiacRange::new(ZodiacAnimal::Snake, (2013, 2, 10), (2014, 1, 30)),
    ZodiacRange::new(ZodiacAnimal::Horse, (2014, 1, 31), (2015, 2, 18)),
    ZodiacRange::new(ZodiacAnimal::Goat, (2015, 2, 19), (2016, 2, 7)),
    ZodiacRange::new(ZodiacAnimal::Monkey, (2016, 2, 8), (2017, 1, 27)),
    ZodiacRange::new(ZodiacAnimal::Rooster, (2017, 1, 28), (2018, 2, 15)),
    ZodiacRange::new(ZodiacAnimal::Dog, (2018, 2, 16), (2019, 2, 4)),
    ZodiacRange::new(ZodiacAnimal::Pig, (2019, 2, 5), (2020, 1, 24)),
    ZodiacRange::new(ZodiacAnimal::Rat, (2020, 1, 25), (2021, 1, 24)),
    ZodiacRange::new(ZodiacAnimal::Ox, (2021, 1, 24), (2022, 1, 31)),
    ZodiacRange::new(ZodiacAnimal::Tiger, (2022, 2, 1), (2023, 1, 21)),
    ZodiacRange::new(ZodiacAnimal::Rabbit, (2023, 1, 22), (2024, 2, 9)),
];
