// This file is part of tafel-locaties.
//
// tafel-locaties is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tafel-locaties is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::{location::LocationIndex, province::Province};

/// A city with its own location page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct City<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub province: Province,
}

#[rustfmt::skip]
pub const CITIES: [City<'static>; 60] = [
    City { slug: "brugge", name: "Brugge", province: Province::WestVlaanderen },
    City { slug: "kortrijk", name: "Kortrijk", province: Province::WestVlaanderen },
    City { slug: "oostende", name: "Oostende", province: Province::WestVlaanderen },
    City { slug: "roeselare", name: "Roeselare", province: Province::WestVlaanderen },
    City { slug: "waregem", name: "Waregem", province: Province::WestVlaanderen },
    City { slug: "ieper", name: "Ieper", province: Province::WestVlaanderen },
    City { slug: "menen", name: "Menen", province: Province::WestVlaanderen },
    City { slug: "torhout", name: "Torhout", province: Province::WestVlaanderen },
    City { slug: "izegem", name: "Izegem", province: Province::WestVlaanderen },
    City { slug: "tielt", name: "Tielt", province: Province::WestVlaanderen },
    City { slug: "knokke-heist", name: "Knokke-Heist", province: Province::WestVlaanderen },
    City { slug: "blankenberge", name: "Blankenberge", province: Province::WestVlaanderen },
    City { slug: "harelbeke", name: "Harelbeke", province: Province::WestVlaanderen },
    City { slug: "wevelgem", name: "Wevelgem", province: Province::WestVlaanderen },
    City { slug: "kuurne", name: "Kuurne", province: Province::WestVlaanderen },
    City { slug: "deerlijk", name: "Deerlijk", province: Province::WestVlaanderen },
    City { slug: "zwevegem", name: "Zwevegem", province: Province::WestVlaanderen },
    City { slug: "poperinge", name: "Poperinge", province: Province::WestVlaanderen },
    City { slug: "diksmuide", name: "Diksmuide", province: Province::WestVlaanderen },
    City { slug: "oostkamp", name: "Oostkamp", province: Province::WestVlaanderen },
    City { slug: "zedelgem", name: "Zedelgem", province: Province::WestVlaanderen },
    City { slug: "lichtervelde", name: "Lichtervelde", province: Province::WestVlaanderen },
    City { slug: "wervik", name: "Wervik", province: Province::WestVlaanderen },
    City { slug: "wingene", name: "Wingene", province: Province::WestVlaanderen },
    City { slug: "gistel", name: "Gistel", province: Province::WestVlaanderen },
    City { slug: "moorslede", name: "Moorslede", province: Province::WestVlaanderen },
    City { slug: "staden", name: "Staden", province: Province::WestVlaanderen },
    City { slug: "kortemark", name: "Kortemark", province: Province::WestVlaanderen },
    City { slug: "ardooie", name: "Ardooie", province: Province::WestVlaanderen },
    City { slug: "anzegem", name: "Anzegem", province: Province::WestVlaanderen },
    City { slug: "gent", name: "Gent", province: Province::OostVlaanderen },
    City { slug: "aalst", name: "Aalst", province: Province::OostVlaanderen },
    City { slug: "sint-niklaas", name: "Sint-Niklaas", province: Province::OostVlaanderen },
    City { slug: "dendermonde", name: "Dendermonde", province: Province::OostVlaanderen },
    City { slug: "lokeren", name: "Lokeren", province: Province::OostVlaanderen },
    City { slug: "oudenaarde", name: "Oudenaarde", province: Province::OostVlaanderen },
    City { slug: "ninove", name: "Ninove", province: Province::OostVlaanderen },
    City { slug: "zottegem", name: "Zottegem", province: Province::OostVlaanderen },
    City { slug: "geraardsbergen", name: "Geraardsbergen", province: Province::OostVlaanderen },
    City { slug: "eeklo", name: "Eeklo", province: Province::OostVlaanderen },
    City { slug: "deinze", name: "Deinze", province: Province::OostVlaanderen },
    City { slug: "ronse", name: "Ronse", province: Province::OostVlaanderen },
    City { slug: "wetteren", name: "Wetteren", province: Province::OostVlaanderen },
    City { slug: "lebbeke", name: "Lebbeke", province: Province::OostVlaanderen },
    City { slug: "merelbeke", name: "Merelbeke", province: Province::OostVlaanderen },
    City { slug: "beveren", name: "Beveren", province: Province::OostVlaanderen },
    City { slug: "lede", name: "Lede", province: Province::OostVlaanderen },
    City { slug: "erpe-mere", name: "Erpe-Mere", province: Province::OostVlaanderen },
    City { slug: "waasmunster", name: "Waasmunster", province: Province::OostVlaanderen },
    City { slug: "temse", name: "Temse", province: Province::OostVlaanderen },
    City { slug: "lochristi", name: "Lochristi", province: Province::OostVlaanderen },
    City { slug: "evergem", name: "Evergem", province: Province::OostVlaanderen },
    City { slug: "zelzate", name: "Zelzate", province: Province::OostVlaanderen },
    City { slug: "destelbergen", name: "Destelbergen", province: Province::OostVlaanderen },
    City { slug: "nazareth", name: "Nazareth", province: Province::OostVlaanderen },
    City { slug: "maldegem", name: "Maldegem", province: Province::OostVlaanderen },
    City { slug: "hamme", name: "Hamme", province: Province::OostVlaanderen },
    City { slug: "assenede", name: "Assenede", province: Province::OostVlaanderen },
    City { slug: "kaprijke", name: "Kaprijke", province: Province::OostVlaanderen },
    City { slug: "sint-lievens-houtem", name: "Sint-Lievens-Houtem", province: Province::OostVlaanderen },
];

#[must_use]
pub fn lookup(slug: &str) -> Option<City<'static>> {
    CITIES.iter().find(|city| city.slug == slug).copied()
}

/// Looks in the built-in pages first, then at the main municipalities of the
/// index.
#[must_use]
pub fn lookup_in<'a>(slug: &str, index: Option<&'a LocationIndex>) -> Option<City<'a>> {
    let builtin: Option<City<'a>> = lookup(slug);

    builtin.or_else(|| {
        let (location, province) = index?.find_main(slug)?;

        Some(City {
            slug: &location.slug,
            name: &location.name,
            province,
        })
    })
}
