//! Chart of accounts for a language school.

use crate::{AccountKind, CategorySeed, CostType, ItemSeed};

const fn income(
    code: &'static str,
    name: &'static str,
    parent: Option<&'static str>,
    description: &'static str,
    sort_order: i32,
) -> CategorySeed {
    CategorySeed {
        code,
        name,
        kind: AccountKind::Income,
        cost_type: None,
        parent,
        description: Some(description),
        sort_order,
    }
}

const fn expense(
    code: &'static str,
    name: &'static str,
    cost_type: CostType,
    description: &'static str,
    sort_order: i32,
) -> CategorySeed {
    CategorySeed {
        code,
        name,
        kind: AccountKind::Expense,
        cost_type: Some(cost_type),
        parent: None,
        description: Some(description),
        sort_order,
    }
}

pub const CATEGORIES: &[CategorySeed] = &[
    income("THU-HP", "Thu từ Học phí", None, "Các khoản thu từ học phí các khóa học", 1),
    income("THU-HP-IELTS", "Học phí IELTS", Some("THU-HP"), "Thu từ các khóa IELTS", 1),
    income("THU-HP-TOEIC", "Học phí TOEIC", Some("THU-HP"), "Thu từ các khóa TOEIC", 1),
    income("THU-HP-GIAO", "Học phí Giao tiếp", Some("THU-HP"), "Thu từ các khóa giao tiếp", 1),
    income("THU-HP-THIEU", "Học phí Thiếu nhi", Some("THU-HP"), "Thu từ các khóa thiếu nhi", 1),
    income("THU-DV", "Thu từ Dịch vụ", None, "Các khoản thu từ dịch vụ", 2),
    income("THU-KHAC", "Thu khác", None, "Các khoản thu khác", 3),
    expense("CHI-VH", "Chi phí vận hành", CostType::Variable, "Các khoản chi vận hành hàng ngày", 1),
    expense("CHI-LVP", "Chi phí lương văn phòng", CostType::Fixed, "Lương và phúc lợi nhân viên văn phòng", 2),
    expense("CHI-LGV", "Chi phí lương giáo viên", CostType::Variable, "Lương và phúc lợi giáo viên", 3),
    expense("CHI-VPP", "Chi phí văn phòng phẩm", CostType::Variable, "Văn phòng phẩm cho hoạt động hành chính", 4),
    expense("CHI-VTLH", "Vật tư lớp học", CostType::Variable, "Vật tư, trang thiết bị phục vụ giảng dạy", 5),
    expense("CHI-BH", "Chi phí bán hàng", CostType::Variable, "Marketing, quảng cáo và hoa hồng", 6),
    expense("CHI-CSVC", "Đầu tư cơ sở vật chất", CostType::Infrastructure, "Mặt bằng, nội thất và thiết bị dài hạn", 7),
];

/// Tuition sub-categories get one main-course and one supplementary item each.
const TUITION: &[(&str, &str)] = &[
    ("THU-HP-IELTS", "Học phí IELTS"),
    ("THU-HP-TOEIC", "Học phí TOEIC"),
    ("THU-HP-GIAO", "Học phí Giao tiếp"),
    ("THU-HP-THIEU", "Học phí Thiếu nhi"),
];

type ItemGroup = (&'static str, AccountKind, &'static [(&'static str, &'static str, &'static str)]);

const ITEMS: &[ItemGroup] = &[
    (
        "THU-DV",
        AccountKind::Income,
        &[
            ("THU-DV-TLTK", "Thu phí tư vấn/placement test", "Phí tư vấn, kiểm tra trình độ"),
            ("THU-DV-TAILIEU", "Thu bán tài liệu", "Sách, giáo trình, tài liệu"),
            ("THU-DV-THI", "Thu phí thi thử", "Lệ phí thi thử IELTS, TOEIC"),
            ("THU-DV-CHUNGNHAN", "Thu phí cấp chứng nhận", "Phí cấp chứng chỉ, chứng nhận"),
        ],
    ),
    (
        "THU-KHAC",
        AccountKind::Income,
        &[
            ("THU-KHAC-TK", "Lãi tiền gửi ngân hàng", "Lãi từ tiền gửi"),
            ("THU-KHAC-HT", "Thu từ hợp tác đối tác", "Thu từ các chương trình hợp tác"),
            ("THU-KHAC-TC", "Thu từ tài trợ", "Tài trợ, quyên góp"),
        ],
    ),
    (
        "CHI-VH",
        AccountKind::Expense,
        &[
            ("CHI-VH-DIEN", "Tiền điện", "Điện năng tiêu thụ"),
            ("CHI-VH-NUOC", "Tiền nước", "Nước sinh hoạt"),
            ("CHI-VH-NET", "Internet", "Cước internet, wifi"),
            ("CHI-VH-DIENTHOAI", "Điện thoại", "Cước điện thoại cố định"),
            ("CHI-VH-VESINH", "Vệ sinh", "Dịch vụ vệ sinh, dọn dẹp"),
            ("CHI-VH-BAOVE", "Bảo vệ", "Dịch vụ bảo vệ, an ninh"),
            ("CHI-VH-SUACHUA", "Sửa chữa bảo trì", "Sửa chữa trang thiết bị"),
        ],
    ),
    (
        "CHI-LVP",
        AccountKind::Expense,
        &[
            ("CHI-LVP-LUONG", "Lương nhân viên văn phòng", "Lương cơ bản NV hành chính"),
            ("CHI-LVP-BHXH", "BHXH, BHYT, BHTN văn phòng", "Bảo hiểm bắt buộc NV văn phòng"),
            ("CHI-LVP-THUONG", "Thưởng nhân viên văn phòng", "Thưởng hiệu suất, KPI"),
            ("CHI-LVP-PHUCAP", "Phụ cấp nhân viên văn phòng", "Ăn trưa, xăng xe, điện thoại..."),
        ],
    ),
    (
        "CHI-LGV",
        AccountKind::Expense,
        &[
            ("CHI-LGV-LUONG", "Lương giáo viên", "Lương cơ bản, phụ cấp giáo viên"),
            ("CHI-LGV-BHXH", "BHXH, BHYT, BHTN giáo viên", "Bảo hiểm bắt buộc GV"),
            ("CHI-LGV-THUONG", "Thưởng giáo viên", "Thưởng theo KPI, đánh giá học viên"),
            ("CHI-LGV-DAOTAO", "Đào tạo giáo viên", "Khóa học nâng cao, workshop, chứng chỉ"),
        ],
    ),
    (
        "CHI-VPP",
        AccountKind::Expense,
        &[
            ("CHI-VPP-GIAYBUT", "Giấy, bút, văn phòng phẩm", "Giấy A4, bút, kẹp, ghim..."),
            ("CHI-VPP-IN", "Mực in, vật tư máy in", "Mực máy in, toner..."),
            ("CHI-VPP-PHOTOCOPY", "Photocopy, in ấn", "Dịch vụ photocopy, in tài liệu hành chính"),
        ],
    ),
    (
        "CHI-VTLH",
        AccountKind::Expense,
        &[
            ("CHI-VTLH-TAILIEU", "Mua tài liệu giảng dạy", "Sách giáo khoa, tài liệu tham khảo cho GV"),
            ("CHI-VTLH-BANPHAN", "Bảng, phấn, bút lông", "Phấn viết bảng, bút lông, tẩy bảng"),
            ("CHI-VTLH-THIETBI", "Thiết bị giảng dạy", "Loa, mic, remote máy chiếu..."),
            ("CHI-VTLH-PHOTOCOPY", "Photocopy tài liệu học viên", "In ấn, photocopy handouts, bài tập"),
        ],
    ),
    (
        "CHI-BH",
        AccountKind::Expense,
        &[
            ("CHI-BH-FB", "Quảng cáo Facebook", "Facebook Ads"),
            ("CHI-BH-GOOGLE", "Quảng cáo Google", "Google Ads, SEO"),
            ("CHI-BH-BANNER", "In banner, standee, poster", "Vật phẩm truyền thông"),
            ("CHI-BH-EVENT", "Tổ chức sự kiện", "Hội thảo, workshop, offline event"),
            ("CHI-BH-GIFT", "Quà tặng khách hàng", "Quà tri ân, khuyến mãi, voucher"),
            ("CHI-BH-HOAHONG", "Hoa hồng tư vấn viên", "Hoa hồng sales, telesales"),
        ],
    ),
    (
        "CHI-CSVC",
        AccountKind::Expense,
        &[
            ("CHI-CSVC-THUE", "Thuê/mua mặt bằng", "Tiền thuê văn phòng, lớp học dài hạn"),
            ("CHI-CSVC-NOITHAT", "Mua nội thất", "Bàn ghế, tủ, kệ sách..."),
            ("CHI-CSVC-MAYCHIEU", "Máy chiếu, tivi, bảng thông minh", "Thiết bị giảng dạy cao cấp"),
            ("CHI-CSVC-DIEUHOA", "Điều hòa, máy lạnh", "Hệ thống điều hòa không khí"),
            ("CHI-CSVC-MAYTINH", "Máy tính, laptop", "Máy tính cho GV, nhân viên"),
            ("CHI-CSVC-PHANMEM", "Phần mềm, hệ thống quản lý", "CRM, ERP, LMS, license phần mềm"),
            ("CHI-CSVC-XAYDUNG", "Xây dựng, sửa chữa lớn", "Nâng cấp cơ sở vật chất lớn"),
        ],
    ),
];

pub fn items() -> Vec<ItemSeed> {
    let mut items = Vec::new();
    for (category, name) in TUITION {
        for (suffix, label, description, sort_order) in [
            ("CK", "Chính khóa", "Thu học phí chính khóa", 1),
            ("PK", "Phụ khóa", "Thu học phí phụ khóa/bổ trợ", 2),
        ] {
            items.push(ItemSeed {
                code: format!("{category}-{suffix}"),
                name: format!("{name} - {label}"),
                category: category.to_string(),
                kind: AccountKind::Income,
                description: Some(description.to_string()),
                sort_order,
            });
        }
    }
    for (category, kind, group) in ITEMS {
        for (index, (code, name, description)) in group.iter().enumerate() {
            items.push(ItemSeed {
                code: code.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                kind: *kind,
                description: Some(description.to_string()),
                sort_order: index as i32 + 1,
            });
        }
    }
    items
}
