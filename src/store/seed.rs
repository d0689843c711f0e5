//! Sample reference data inserted into an empty database.

/// (name, level, description)
pub const TOPICS: [(&str, &str, &str); 8] = [
    ("Gia đình", "A1", "Từ vựng cơ bản về gia đình"),
    ("Du lịch", "A2", "Từ vựng liên quan đến du lịch"),
    ("Kinh doanh", "B1", "Từ vựng tiếng Anh thương mại"),
    ("Công nghệ", "B2", "Thuật ngữ công nghệ thông tin"),
    ("Đồ ăn", "A2", "Từ vựng về thức ăn và đồ uống"),
    ("Sức khỏe", "B1", "Từ vựng y tế và sức khỏe"),
    ("Giáo dục", "B1", "Từ vựng về giáo dục và học tập"),
    ("Thể thao", "A2", "Từ vựng về các môn thể thao"),
];

/// (word, meaning, example, pronunciation, topic index starting at 1)
pub const VOCABULARIES: [(&str, &str, &str, &str, i64); 80] = [
    // Gia đình
    ("father", "bố, cha", "My father is a teacher.", "/ˈfɑːðər/", 1),
    ("mother", "mẹ", "My mother cooks delicious food.", "/ˈmʌðər/", 1),
    ("brother", "anh trai, em trai", "I have one brother.", "/ˈbrʌðər/", 1),
    ("sister", "chị gái, em gái", "My sister is younger than me.", "/ˈsɪstər/", 1),
    ("grandfather", "ông nội, ông ngoại", "My grandfather tells great stories.", "/ˈɡrænfɑːðər/", 1),
    ("grandmother", "bà nội, bà ngoại", "Grandmother makes the best cookies.", "/ˈɡrænmʌðər/", 1),
    ("uncle", "chú, bác, cậu", "My uncle lives in Canada.", "/ˈʌŋkəl/", 1),
    ("aunt", "cô, dì, thím", "Aunt Mary is coming for dinner.", "/ænt/", 1),
    ("cousin", "anh em họ", "My cousin and I are the same age.", "/ˈkʌzən/", 1),
    ("parents", "bố mẹ", "My parents are very supportive.", "/ˈperənts/", 1),
    // Du lịch
    ("airport", "sân bay", "We arrived at the airport early.", "/ˈeərpɔːrt/", 2),
    ("hotel", "khách sạn", "The hotel was very comfortable.", "/hoʊˈtel/", 2),
    ("passport", "hộ chiếu", "Don't forget your passport.", "/ˈpæspɔːrt/", 2),
    ("ticket", "vé", "I bought a plane ticket online.", "/ˈtɪkɪt/", 2),
    ("luggage", "hành lý", "My luggage is too heavy.", "/ˈlʌɡɪdʒ/", 2),
    ("vacation", "kỳ nghỉ", "We had a wonderful vacation.", "/veɪˈkeɪʃən/", 2),
    ("tourist", "khách du lịch", "The city is full of tourists.", "/ˈtʊrɪst/", 2),
    ("guide", "hướng dẫn viên", "Our tour guide was very knowledgeable.", "/ɡaɪd/", 2),
    ("map", "bản đồ", "I need a map of the city.", "/mæp/", 2),
    ("restaurant", "nhà hàng", "Let's try that new restaurant.", "/ˈrestərɑːnt/", 2),
    // Kinh doanh
    ("meeting", "cuộc họp", "We have a meeting at 3 PM.", "/ˈmiːtɪŋ/", 3),
    ("office", "văn phòng", "I work in a modern office.", "/ˈɔːfɪs/", 3),
    ("manager", "quản lý", "The manager approved my request.", "/ˈmænɪdʒər/", 3),
    ("employee", "nhân viên", "Every employee gets health insurance.", "/ɪmˈplɔːiː/", 3),
    ("salary", "lương", "My salary increased this year.", "/ˈsæləri/", 3),
    ("contract", "hợp đồng", "Please sign the contract.", "/ˈkɑːntrækt/", 3),
    ("client", "khách hàng", "We need to satisfy our clients.", "/ˈklaɪənt/", 3),
    ("project", "dự án", "This project will take six months.", "/ˈprɑːdʒekt/", 3),
    ("deadline", "hạn chót", "The deadline is next Friday.", "/ˈdedlaɪn/", 3),
    ("presentation", "bài thuyết trình", "I have to give a presentation tomorrow.", "/ˌpriːzenˈteɪʃən/", 3),
    // Công nghệ
    ("computer", "máy tính", "I use my computer every day.", "/kəmˈpjuːtər/", 4),
    ("internet", "mạng internet", "The internet connection is slow.", "/ˈɪntərnet/", 4),
    ("website", "trang web", "This website is very useful.", "/ˈwebsaɪt/", 4),
    ("software", "phần mềm", "We need to update the software.", "/ˈsɔːftwer/", 4),
    ("smartphone", "điện thoại thông minh", "My smartphone has many apps.", "/ˈsmɑːrtfoʊn/", 4),
    ("application", "ứng dụng", "Download this application.", "/ˌæplɪˈkeɪʃən/", 4),
    ("password", "mật khẩu", "Create a strong password.", "/ˈpæswərd/", 4),
    ("email", "thư điện tử", "Send me an email later.", "/ˈiːmeɪl/", 4),
    ("database", "cơ sở dữ liệu", "The database contains customer information.", "/ˈdeɪtəbeɪs/", 4),
    ("programming", "lập trình", "Programming requires logical thinking.", "/ˈproʊɡræmɪŋ/", 4),
    // Đồ ăn
    ("breakfast", "bữa sáng", "I have breakfast at 7 AM.", "/ˈbrekfəst/", 5),
    ("lunch", "bữa trưa", "Let's have lunch together.", "/lʌntʃ/", 5),
    ("dinner", "bữa tối", "Dinner is ready!", "/ˈdɪnər/", 5),
    ("rice", "cơm, gạo", "Rice is a staple food in Vietnam.", "/raɪs/", 5),
    ("bread", "bánh mì", "I bought fresh bread this morning.", "/bred/", 5),
    ("fruit", "trái cây", "Eat more fruit for vitamins.", "/fruːt/", 5),
    ("vegetable", "rau củ", "Vegetables are good for health.", "/ˈvedʒtəbəl/", 5),
    ("meat", "thịt", "This meat is very tender.", "/miːt/", 5),
    ("fish", "cá", "Fish is rich in protein.", "/fɪʃ/", 5),
    ("water", "nước", "Drink plenty of water daily.", "/ˈwɔːtər/", 5),
    // Sức khỏe
    ("doctor", "bác sĩ", "I need to see a doctor.", "/ˈdɑːktər/", 6),
    ("hospital", "bệnh viện", "The hospital is nearby.", "/ˈhɑːspɪtəl/", 6),
    ("medicine", "thuốc", "Take this medicine twice a day.", "/ˈmedɪsən/", 6),
    ("healthy", "khỏe mạnh", "Exercise keeps you healthy.", "/ˈhelθi/", 6),
    ("sick", "ốm, bệnh", "I feel sick today.", "/sɪk/", 6),
    ("pain", "đau", "I have a pain in my back.", "/peɪn/", 6),
    ("fever", "sốt", "The child has a high fever.", "/ˈfiːvər/", 6),
    ("headache", "đau đầu", "I have a terrible headache.", "/ˈhedeɪk/", 6),
    ("exercise", "tập thể dục", "Exercise is important for health.", "/ˈeksərsaɪz/", 6),
    ("vitamin", "vitamin", "Vitamin C boosts immunity.", "/ˈvaɪtəmɪn/", 6),
    // Giáo dục
    ("school", "trường học", "My school is very big.", "/skuːl/", 7),
    ("teacher", "giáo viên", "The teacher explains very well.", "/ˈtiːtʃər/", 7),
    ("student", "học sinh, sinh viên", "Every student should study hard.", "/ˈstuːdənt/", 7),
    ("book", "sách", "This book is very interesting.", "/bʊk/", 7),
    ("lesson", "bài học", "Today's lesson is about grammar.", "/ˈlesən/", 7),
    ("homework", "bài tập về nhà", "I finished my homework early.", "/ˈhoʊmwɜːrk/", 7),
    ("exam", "kỳ thi", "The exam is next week.", "/ɪɡˈzæm/", 7),
    ("grade", "điểm số", "I got a good grade on the test.", "/ɡreɪd/", 7),
    ("library", "thư viện", "I study in the library.", "/ˈlaɪbreri/", 7),
    ("knowledge", "kiến thức", "Knowledge is power.", "/ˈnɑːlɪdʒ/", 7),
    // Thể thao
    ("football", "bóng đá", "Football is popular worldwide.", "/ˈfʊtbɔːl/", 8),
    ("basketball", "bóng rổ", "He plays basketball every weekend.", "/ˈbæskɪtbɔːl/", 8),
    ("swimming", "bơi lội", "Swimming is great exercise.", "/ˈswɪmɪŋ/", 8),
    ("running", "chạy bộ", "I go running every morning.", "/ˈrʌnɪŋ/", 8),
    ("tennis", "quần vợt", "Tennis requires good coordination.", "/ˈtenɪs/", 8),
    ("volleyball", "bóng chuyền", "Our team won the volleyball match.", "/ˈvɑːlibɔːl/", 8),
    ("badminton", "cầu lông", "Badminton is popular in Asia.", "/ˈbædmɪntən/", 8),
    ("cycling", "đạp xe", "Cycling is environmentally friendly.", "/ˈsaɪklɪŋ/", 8),
    ("gym", "phòng tập gym", "I work out at the gym.", "/dʒɪm/", 8),
    ("team", "đội, nhóm", "Our team practices every day.", "/tiːm/", 8),
];

/// (topic index, question, option A, B, C, D, correct label)
pub const QUIZZES: [(i64, &str, &str, &str, &str, &str, &str); 24] = [
    (1, "Từ \"father\" có nghĩa là gì?", "bố, cha", "mẹ", "anh trai", "chị gái", "A"),
    (1, "Từ \"sister\" có nghĩa là gì?", "bố", "mẹ", "anh trai", "chị gái, em gái", "D"),
    (1, "Từ \"grandfather\" có nghĩa là gì?", "ông nội, ông ngoại", "bà nội, bà ngoại", "chú, bác", "cô, dì", "A"),
    (2, "Từ \"airport\" có nghĩa là gì?", "khách sạn", "sân bay", "hộ chiếu", "máy bay", "B"),
    (2, "Từ \"hotel\" có nghĩa là gì?", "sân bay", "khách sạn", "nhà hàng", "bản đồ", "B"),
    (2, "Từ \"passport\" có nghĩa là gì?", "vé máy bay", "hành lý", "hộ chiếu", "bản đồ", "C"),
    (3, "Từ \"meeting\" có nghĩa là gì?", "cuộc họp", "văn phòng", "công ty", "nhân viên", "A"),
    (3, "Từ \"manager\" có nghĩa là gì?", "nhân viên", "quản lý", "khách hàng", "dự án", "B"),
    (3, "Từ \"salary\" có nghĩa là gì?", "hợp đồng", "lương", "dự án", "hạn chót", "B"),
    (4, "Từ \"computer\" có nghĩa là gì?", "điện thoại", "máy tính", "internet", "phần mềm", "B"),
    (4, "Từ \"internet\" có nghĩa là gì?", "máy tính", "mạng internet", "trang web", "ứng dụng", "B"),
    (4, "Từ \"smartphone\" có nghĩa là gì?", "máy tính", "điện thoại thông minh", "phần mềm", "mật khẩu", "B"),
    (5, "Từ \"breakfast\" có nghĩa là gì?", "bữa sáng", "bữa trưa", "bữa tối", "đồ ăn nhẹ", "A"),
    (5, "Từ \"rice\" có nghĩa là gì?", "bánh mì", "cơm, gạo", "trái cây", "rau củ", "B"),
    (5, "Từ \"fruit\" có nghĩa là gì?", "rau củ", "thịt", "trái cây", "cá", "C"),
    (6, "Từ \"doctor\" có nghĩa là gì?", "bác sĩ", "bệnh viện", "thuốc", "bệnh nhân", "A"),
    (6, "Từ \"medicine\" có nghĩa là gì?", "bác sĩ", "bệnh viện", "thuốc", "sức khỏe", "C"),
    (6, "Từ \"healthy\" có nghĩa là gì?", "ốm", "khỏe mạnh", "đau", "sốt", "B"),
    (7, "Từ \"school\" có nghĩa là gì?", "trường học", "giáo viên", "học sinh", "sách", "A"),
    (7, "Từ \"teacher\" có nghĩa là gì?", "học sinh", "giáo viên", "sách", "bài học", "B"),
    (7, "Từ \"homework\" có nghĩa là gì?", "bài học", "kỳ thi", "bài tập về nhà", "thư viện", "C"),
    (8, "Từ \"football\" có nghĩa là gì?", "bóng đá", "bóng rổ", "bơi lội", "chạy bộ", "A"),
    (8, "Từ \"swimming\" có nghĩa là gì?", "chạy bộ", "quần vợt", "bơi lội", "đạp xe", "C"),
    (8, "Từ \"gym\" có nghĩa là gì?", "đội nhóm", "phòng tập gym", "sân vận động", "huấn luyện viên", "B"),
];

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";
