//! Built-in airport table: IATA code, airport name, city, country.

use super::Airport;

pub(super) const AIRPORTS: &[Airport] = &[
    // United Kingdom
    Airport::new("LHR", "London Heathrow", "London", "United Kingdom"),
    Airport::new("LGW", "London Gatwick", "London", "United Kingdom"),
    Airport::new("STN", "London Stansted", "London", "United Kingdom"),
    Airport::new("LTN", "London Luton", "London", "United Kingdom"),
    Airport::new("LCY", "London City", "London", "United Kingdom"),
    Airport::new("MAN", "Manchester Airport", "Manchester", "United Kingdom"),
    Airport::new("BHX", "Birmingham Airport", "Birmingham", "United Kingdom"),
    Airport::new("EDI", "Edinburgh Airport", "Edinburgh", "United Kingdom"),
    Airport::new("GLA", "Glasgow Airport", "Glasgow", "United Kingdom"),
    Airport::new("BRS", "Bristol Airport", "Bristol", "United Kingdom"),
    Airport::new("LPL", "Liverpool John Lennon", "Liverpool", "United Kingdom"),
    Airport::new("NCL", "Newcastle Airport", "Newcastle", "United Kingdom"),
    Airport::new("EMA", "East Midlands Airport", "Nottingham", "United Kingdom"),
    Airport::new("BFS", "Belfast International", "Belfast", "United Kingdom"),
    Airport::new("ABZ", "Aberdeen Airport", "Aberdeen", "United Kingdom"),
    Airport::new("CWL", "Cardiff Airport", "Cardiff", "United Kingdom"),
    Airport::new("SOU", "Southampton Airport", "Southampton", "United Kingdom"),
    Airport::new("LBA", "Leeds Bradford Airport", "Leeds", "United Kingdom"),
    // United States
    Airport::new("JFK", "John F. Kennedy International", "New York", "United States"),
    Airport::new("LAX", "Los Angeles International", "Los Angeles", "United States"),
    Airport::new("ORD", "Chicago O'Hare International", "Chicago", "United States"),
    Airport::new("ATL", "Hartsfield-Jackson Atlanta", "Atlanta", "United States"),
    Airport::new("DFW", "Dallas/Fort Worth International", "Dallas", "United States"),
    Airport::new("DEN", "Denver International", "Denver", "United States"),
    Airport::new("SFO", "San Francisco International", "San Francisco", "United States"),
    Airport::new("SEA", "Seattle-Tacoma International", "Seattle", "United States"),
    Airport::new("MIA", "Miami International", "Miami", "United States"),
    Airport::new("MCO", "Orlando International", "Orlando", "United States"),
    Airport::new("EWR", "Newark Liberty International", "Newark", "United States"),
    Airport::new("LGA", "LaGuardia Airport", "New York", "United States"),
    Airport::new("BOS", "Boston Logan International", "Boston", "United States"),
    Airport::new("IAD", "Washington Dulles International", "Washington", "United States"),
    Airport::new("DCA", "Ronald Reagan Washington National", "Washington", "United States"),
    Airport::new("PHX", "Phoenix Sky Harbor", "Phoenix", "United States"),
    Airport::new("IAH", "George Bush Intercontinental", "Houston", "United States"),
    Airport::new("LAS", "Harry Reid International", "Las Vegas", "United States"),
    Airport::new("MSP", "Minneapolis-Saint Paul International", "Minneapolis", "United States"),
    Airport::new("DTW", "Detroit Metropolitan", "Detroit", "United States"),
    Airport::new("PHL", "Philadelphia International", "Philadelphia", "United States"),
    // France
    Airport::new("CDG", "Paris Charles de Gaulle", "Paris", "France"),
    Airport::new("ORY", "Paris Orly", "Paris", "France"),
    Airport::new("NCE", "Nice Cote d'Azur", "Nice", "France"),
    Airport::new("LYS", "Lyon-Saint Exupery", "Lyon", "France"),
    Airport::new("MRS", "Marseille Provence", "Marseille", "France"),
    Airport::new("TLS", "Toulouse-Blagnac", "Toulouse", "France"),
    Airport::new("BOD", "Bordeaux-Merignac", "Bordeaux", "France"),
    // Germany
    Airport::new("FRA", "Frankfurt Airport", "Frankfurt", "Germany"),
    Airport::new("MUC", "Munich Airport", "Munich", "Germany"),
    Airport::new("BER", "Berlin Brandenburg", "Berlin", "Germany"),
    Airport::new("DUS", "Dusseldorf Airport", "Dusseldorf", "Germany"),
    Airport::new("HAM", "Hamburg Airport", "Hamburg", "Germany"),
    Airport::new("CGN", "Cologne Bonn Airport", "Cologne", "Germany"),
    Airport::new("STR", "Stuttgart Airport", "Stuttgart", "Germany"),
    // Spain
    Airport::new("MAD", "Madrid-Barajas", "Madrid", "Spain"),
    Airport::new("BCN", "Barcelona-El Prat", "Barcelona", "Spain"),
    Airport::new("PMI", "Palma de Mallorca", "Palma", "Spain"),
    Airport::new("AGP", "Malaga-Costa del Sol", "Malaga", "Spain"),
    Airport::new("ALC", "Alicante-Elche", "Alicante", "Spain"),
    Airport::new("TFS", "Tenerife South", "Tenerife", "Spain"),
    Airport::new("LPA", "Gran Canaria Airport", "Las Palmas", "Spain"),
    // Italy
    Airport::new("FCO", "Rome Fiumicino", "Rome", "Italy"),
    Airport::new("MXP", "Milan Malpensa", "Milan", "Italy"),
    Airport::new("LIN", "Milan Linate", "Milan", "Italy"),
    Airport::new("VCE", "Venice Marco Polo", "Venice", "Italy"),
    Airport::new("NAP", "Naples International", "Naples", "Italy"),
    Airport::new("BLQ", "Bologna Guglielmo Marconi", "Bologna", "Italy"),
    Airport::new("FLR", "Florence Airport", "Florence", "Italy"),
    // Netherlands
    Airport::new("AMS", "Amsterdam Schiphol", "Amsterdam", "Netherlands"),
    Airport::new("EIN", "Eindhoven Airport", "Eindhoven", "Netherlands"),
    // Switzerland
    Airport::new("ZRH", "Zurich Airport", "Zurich", "Switzerland"),
    Airport::new("GVA", "Geneva Airport", "Geneva", "Switzerland"),
    Airport::new("BSL", "Basel-Mulhouse-Freiburg", "Basel", "Switzerland"),
    // Portugal
    Airport::new("LIS", "Lisbon Humberto Delgado", "Lisbon", "Portugal"),
    Airport::new("OPO", "Porto Airport", "Porto", "Portugal"),
    Airport::new("FAO", "Faro Airport", "Faro", "Portugal"),
    // Turkey
    Airport::new("IST", "Istanbul Airport", "Istanbul", "Turkey"),
    Airport::new("SAW", "Istanbul Sabiha Gokcen", "Istanbul", "Turkey"),
    Airport::new("AYT", "Antalya Airport", "Antalya", "Turkey"),
    Airport::new("ESB", "Ankara Esenboga", "Ankara", "Turkey"),
    Airport::new("ADB", "Izmir Adnan Menderes", "Izmir", "Turkey"),
    // Greece
    Airport::new("ATH", "Athens International", "Athens", "Greece"),
    Airport::new("SKG", "Thessaloniki Airport", "Thessaloniki", "Greece"),
    Airport::new("HER", "Heraklion International", "Heraklion", "Greece"),
    Airport::new("RHO", "Rhodes International", "Rhodes", "Greece"),
    // Austria
    Airport::new("VIE", "Vienna International", "Vienna", "Austria"),
    Airport::new("SZG", "Salzburg Airport", "Salzburg", "Austria"),
    Airport::new("INN", "Innsbruck Airport", "Innsbruck", "Austria"),
    // Belgium
    Airport::new("BRU", "Brussels Airport", "Brussels", "Belgium"),
    Airport::new("CRL", "Brussels South Charleroi", "Charleroi", "Belgium"),
    // Ireland
    Airport::new("DUB", "Dublin Airport", "Dublin", "Ireland"),
    Airport::new("SNN", "Shannon Airport", "Shannon", "Ireland"),
    Airport::new("ORK", "Cork Airport", "Cork", "Ireland"),
    // Denmark
    Airport::new("CPH", "Copenhagen Airport", "Copenhagen", "Denmark"),
    // Norway
    Airport::new("OSL", "Oslo Gardermoen", "Oslo", "Norway"),
    Airport::new("BGO", "Bergen Airport", "Bergen", "Norway"),
    // Sweden
    Airport::new("ARN", "Stockholm Arlanda", "Stockholm", "Sweden"),
    Airport::new("GOT", "Gothenburg Landvetter", "Gothenburg", "Sweden"),
    // Finland
    Airport::new("HEL", "Helsinki-Vantaa", "Helsinki", "Finland"),
    // Poland
    Airport::new("WAW", "Warsaw Chopin", "Warsaw", "Poland"),
    Airport::new("KRK", "Krakow John Paul II", "Krakow", "Poland"),
    Airport::new("GDN", "Gdansk Lech Walesa", "Gdansk", "Poland"),
    Airport::new("WRO", "Wroclaw Airport", "Wroclaw", "Poland"),
    // Czech Republic
    Airport::new("PRG", "Prague Vaclav Havel", "Prague", "Czech Republic"),
    // Hungary
    Airport::new("BUD", "Budapest Ferenc Liszt", "Budapest", "Hungary"),
    // Romania
    Airport::new("OTP", "Bucharest Henri Coanda", "Bucharest", "Romania"),
    Airport::new("CLJ", "Cluj-Napoca International", "Cluj-Napoca", "Romania"),
    // Croatia
    Airport::new("ZAG", "Zagreb Airport", "Zagreb", "Croatia"),
    Airport::new("DBV", "Dubrovnik Airport", "Dubrovnik", "Croatia"),
    Airport::new("SPU", "Split Airport", "Split", "Croatia"),
    // Bulgaria
    Airport::new("SOF", "Sofia Airport", "Sofia", "Bulgaria"),
    // United Arab Emirates
    Airport::new("DXB", "Dubai International", "Dubai", "United Arab Emirates"),
    Airport::new("AUH", "Abu Dhabi International", "Abu Dhabi", "United Arab Emirates"),
    Airport::new("SHJ", "Sharjah International", "Sharjah", "United Arab Emirates"),
    // Saudi Arabia
    Airport::new("RUH", "King Khalid International", "Riyadh", "Saudi Arabia"),
    Airport::new("JED", "King Abdulaziz International", "Jeddah", "Saudi Arabia"),
    Airport::new("DMM", "King Fahd International", "Dammam", "Saudi Arabia"),
    // Qatar
    Airport::new("DOH", "Hamad International", "Doha", "Qatar"),
    // Bahrain
    Airport::new("BAH", "Bahrain International", "Manama", "Bahrain"),
    // Oman
    Airport::new("MCT", "Muscat International", "Muscat", "Oman"),
    // Kuwait
    Airport::new("KWI", "Kuwait International", "Kuwait City", "Kuwait"),
    // Egypt
    Airport::new("CAI", "Cairo International", "Cairo", "Egypt"),
    Airport::new("HRG", "Hurghada International", "Hurghada", "Egypt"),
    Airport::new("SSH", "Sharm el-Sheikh International", "Sharm el-Sheikh", "Egypt"),
    // South Africa
    Airport::new("JNB", "O.R. Tambo International", "Johannesburg", "South Africa"),
    Airport::new("CPT", "Cape Town International", "Cape Town", "South Africa"),
    Airport::new("DUR", "King Shaka International", "Durban", "South Africa"),
    // Morocco
    Airport::new("CMN", "Mohammed V International", "Casablanca", "Morocco"),
    Airport::new("RAK", "Marrakech Menara", "Marrakech", "Morocco"),
    // Kenya
    Airport::new("NBO", "Jomo Kenyatta International", "Nairobi", "Kenya"),
    Airport::new("MBA", "Moi International", "Mombasa", "Kenya"),
    // Nigeria
    Airport::new("LOS", "Murtala Muhammed International", "Lagos", "Nigeria"),
    Airport::new("ABV", "Nnamdi Azikiwe International", "Abuja", "Nigeria"),
    // Australia
    Airport::new("SYD", "Sydney Kingsford Smith", "Sydney", "Australia"),
    Airport::new("MEL", "Melbourne Tullamarine", "Melbourne", "Australia"),
    Airport::new("BNE", "Brisbane Airport", "Brisbane", "Australia"),
    Airport::new("PER", "Perth Airport", "Perth", "Australia"),
    Airport::new("ADL", "Adelaide Airport", "Adelaide", "Australia"),
    Airport::new("OOL", "Gold Coast Airport", "Gold Coast", "Australia"),
    // New Zealand
    Airport::new("AKL", "Auckland Airport", "Auckland", "New Zealand"),
    Airport::new("WLG", "Wellington Airport", "Wellington", "New Zealand"),
    Airport::new("CHC", "Christchurch Airport", "Christchurch", "New Zealand"),
    // Canada
    Airport::new("YYZ", "Toronto Pearson International", "Toronto", "Canada"),
    Airport::new("YVR", "Vancouver International", "Vancouver", "Canada"),
    Airport::new("YUL", "Montreal-Trudeau International", "Montreal", "Canada"),
    Airport::new("YYC", "Calgary International", "Calgary", "Canada"),
    Airport::new("YOW", "Ottawa Macdonald-Cartier", "Ottawa", "Canada"),
    Airport::new("YEG", "Edmonton International", "Edmonton", "Canada"),
    // Mexico
    Airport::new("MEX", "Mexico City International", "Mexico City", "Mexico"),
    Airport::new("CUN", "Cancun International", "Cancun", "Mexico"),
    Airport::new("GDL", "Guadalajara International", "Guadalajara", "Mexico"),
    // Brazil
    Airport::new("GRU", "Sao Paulo-Guarulhos", "Sao Paulo", "Brazil"),
    Airport::new("GIG", "Rio de Janeiro-Galeao", "Rio de Janeiro", "Brazil"),
    Airport::new("BSB", "Brasilia International", "Brasilia", "Brazil"),
    // Argentina
    Airport::new("EZE", "Buenos Aires Ezeiza", "Buenos Aires", "Argentina"),
    // Colombia
    Airport::new("BOG", "El Dorado International", "Bogota", "Colombia"),
    // Chile
    Airport::new("SCL", "Santiago International", "Santiago", "Chile"),
    // Peru
    Airport::new("LIM", "Jorge Chavez International", "Lima", "Peru"),
    // Japan
    Airport::new("NRT", "Narita International", "Tokyo", "Japan"),
    Airport::new("HND", "Tokyo Haneda", "Tokyo", "Japan"),
    Airport::new("KIX", "Kansai International", "Osaka", "Japan"),
    Airport::new("ITM", "Osaka Itami", "Osaka", "Japan"),
    Airport::new("NGO", "Chubu Centrair", "Nagoya", "Japan"),
    // China
    Airport::new("PEK", "Beijing Capital International", "Beijing", "China"),
    Airport::new("PVG", "Shanghai Pudong", "Shanghai", "China"),
    Airport::new("CAN", "Guangzhou Baiyun", "Guangzhou", "China"),
    Airport::new("SZX", "Shenzhen Bao'an", "Shenzhen", "China"),
    Airport::new("CTU", "Chengdu Tianfu", "Chengdu", "China"),
    Airport::new("HKG", "Hong Kong International", "Hong Kong", "China"),
    // South Korea
    Airport::new("ICN", "Incheon International", "Seoul", "South Korea"),
    Airport::new("GMP", "Gimpo International", "Seoul", "South Korea"),
    Airport::new("PUS", "Gimhae International", "Busan", "South Korea"),
    // Singapore
    Airport::new("SIN", "Singapore Changi", "Singapore", "Singapore"),
    // Thailand
    Airport::new("BKK", "Suvarnabhumi Airport", "Bangkok", "Thailand"),
    Airport::new("DMK", "Don Mueang International", "Bangkok", "Thailand"),
    Airport::new("HKT", "Phuket International", "Phuket", "Thailand"),
    Airport::new("CNX", "Chiang Mai International", "Chiang Mai", "Thailand"),
    // Malaysia
    Airport::new("KUL", "Kuala Lumpur International", "Kuala Lumpur", "Malaysia"),
    Airport::new("PEN", "Penang International", "Penang", "Malaysia"),
    // Indonesia
    Airport::new("CGK", "Soekarno-Hatta International", "Jakarta", "Indonesia"),
    Airport::new("DPS", "Ngurah Rai International", "Bali", "Indonesia"),
    // Philippines
    Airport::new("MNL", "Ninoy Aquino International", "Manila", "Philippines"),
    Airport::new("CEB", "Mactan-Cebu International", "Cebu", "Philippines"),
    // Vietnam
    Airport::new("SGN", "Tan Son Nhat International", "Ho Chi Minh City", "Vietnam"),
    Airport::new("HAN", "Noi Bai International", "Hanoi", "Vietnam"),
    // India
    Airport::new("DEL", "Indira Gandhi International", "New Delhi", "India"),
    Airport::new("BOM", "Chhatrapati Shivaji Maharaj", "Mumbai", "India"),
    Airport::new("BLR", "Kempegowda International", "Bangalore", "India"),
    Airport::new("MAA", "Chennai International", "Chennai", "India"),
    Airport::new("HYD", "Rajiv Gandhi International", "Hyderabad", "India"),
    Airport::new("CCU", "Netaji Subhas Chandra Bose", "Kolkata", "India"),
    Airport::new("GOI", "Goa International", "Goa", "India"),
    // Israel
    Airport::new("TLV", "Ben Gurion International", "Tel Aviv", "Israel"),
    // Jordan
    Airport::new("AMM", "Queen Alia International", "Amman", "Jordan"),
    // Sri Lanka
    Airport::new("CMB", "Bandaranaike International", "Colombo", "Sri Lanka"),
    // Maldives
    Airport::new("MLE", "Velana International", "Male", "Maldives"),
    // Cyprus
    Airport::new("LCA", "Larnaca International", "Larnaca", "Cyprus"),
    Airport::new("PFO", "Paphos International", "Paphos", "Cyprus"),
    // Malta
    Airport::new("MLA", "Malta International", "Valletta", "Malta"),
    // Iceland
    Airport::new("KEF", "Keflavik International", "Reykjavik", "Iceland"),
    // Luxembourg
    Airport::new("LUX", "Luxembourg Airport", "Luxembourg City", "Luxembourg"),
    // Jamaica
    Airport::new("MBJ", "Sangster International", "Montego Bay", "Jamaica"),
    Airport::new("KIN", "Norman Manley International", "Kingston", "Jamaica"),
    // Dominican Republic
    Airport::new("PUJ", "Punta Cana International", "Punta Cana", "Dominican Republic"),
    // Costa Rica
    Airport::new("SJO", "Juan Santamaria International", "San Jose", "Costa Rica"),
    // Panama
    Airport::new("PTY", "Tocumen International", "Panama City", "Panama"),
    // Tanzania
    Airport::new("DAR", "Julius Nyerere International", "Dar es Salaam", "Tanzania"),
    Airport::new("JRO", "Kilimanjaro International", "Kilimanjaro", "Tanzania"),
    // Ethiopia
    Airport::new("ADD", "Addis Ababa Bole International", "Addis Ababa", "Ethiopia"),
    // Ghana
    Airport::new("ACC", "Kotoka International", "Accra", "Ghana"),
    // Tunisia
    Airport::new("TUN", "Tunis-Carthage International", "Tunis", "Tunisia"),
    // Mauritius
    Airport::new("MRU", "Sir Seewoosagur Ramgoolam", "Port Louis", "Mauritius"),
    // Serbia
    Airport::new("BEG", "Belgrade Nikola Tesla", "Belgrade", "Serbia"),
    // Latvia
    Airport::new("RIX", "Riga International", "Riga", "Latvia"),
    // Lithuania
    Airport::new("VNO", "Vilnius Airport", "Vilnius", "Lithuania"),
    // Estonia
    Airport::new("TLL", "Tallinn Airport", "Tallinn", "Estonia"),
    // Slovakia
    Airport::new("BTS", "Bratislava Airport", "Bratislava", "Slovakia"),
    // Slovenia
    Airport::new("LJU", "Ljubljana Joze Pucnik", "Ljubljana", "Slovenia"),
    // Georgia
    Airport::new("TBS", "Tbilisi International", "Tbilisi", "Georgia"),
    // Ukraine
    Airport::new("KBP", "Boryspil International", "Kyiv", "Ukraine"),
    // Russia
    Airport::new("SVO", "Moscow Sheremetyevo", "Moscow", "Russia"),
    Airport::new("DME", "Moscow Domodedovo", "Moscow", "Russia"),
    Airport::new("LED", "Pulkovo Airport", "Saint Petersburg", "Russia"),
    // Taiwan
    Airport::new("TPE", "Taiwan Taoyuan International", "Taipei", "Taiwan"),
    // Pakistan
    Airport::new("ISB", "Islamabad International", "Islamabad", "Pakistan"),
    Airport::new("KHI", "Jinnah International", "Karachi", "Pakistan"),
    Airport::new("LHE", "Allama Iqbal International", "Lahore", "Pakistan"),
    // Bangladesh
    Airport::new("DAC", "Hazrat Shahjalal International", "Dhaka", "Bangladesh"),
    // Nepal
    Airport::new("KTM", "Tribhuvan International", "Kathmandu", "Nepal"),
];
