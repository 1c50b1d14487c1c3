//! Branches, staff positions, demo accounts and sample teachers.

use crate::{AccountSeed, BranchSeed, PositionSeed, TeacherSeed};

pub const BRANCHES: &[BranchSeed] = &[
    BranchSeed {
        code: "HN01",
        name: "Chi Nhánh Hà Nội",
        phone: Some("0241234567"),
        email: Some("hanoi@school.com"),
        address: Some("123 Đường Láng"),
        city: Some("Hà Nội"),
        district: Some("Đống Đa"),
        ward: Some("Láng Thượng"),
        description: Some("Trụ sở chính tại Hà Nội"),
        is_headquarters: true,
    },
    BranchSeed {
        code: "HCM01",
        name: "Chi Nhánh TP.HCM",
        phone: Some("0281234567"),
        email: Some("hcm@school.com"),
        address: Some("456 Nguyễn Huệ"),
        city: Some("TP. Hồ Chí Minh"),
        district: Some("Quận 1"),
        ward: Some("Bến Nghé"),
        description: Some("Chi nhánh tại TP.HCM"),
        is_headquarters: false,
    },
    BranchSeed {
        code: "DN01",
        name: "Chi Nhánh Đà Nẵng",
        phone: Some("0236123456"),
        email: Some("danang@school.com"),
        address: Some("789 Trần Phú"),
        city: Some("Đà Nẵng"),
        district: Some("Hải Châu"),
        ward: Some("Thạch Thang"),
        description: Some("Chi nhánh tại Đà Nẵng"),
        is_headquarters: false,
    },
];

pub const POSITIONS: &[PositionSeed] = &[
    PositionSeed {
        code: "GV01",
        name: "Giáo viên Hạng I",
        level: 1,
        description: Some("Giáo viên hạng I - Trình độ cao nhất"),
        sort_order: 1,
        roles: &["teacher"],
    },
    PositionSeed {
        code: "GV02",
        name: "Giáo viên Hạng II",
        level: 2,
        description: Some("Giáo viên hạng II - Trình độ trung cấp"),
        sort_order: 2,
        roles: &["teacher"],
    },
    PositionSeed {
        code: "GV03",
        name: "Giáo viên Hạng III",
        level: 3,
        description: Some("Giáo viên hạng III - Giáo viên mới"),
        sort_order: 3,
        roles: &["teacher"],
    },
    PositionSeed {
        code: "GVTT",
        name: "Giáo viên Thực tập",
        level: 4,
        description: Some("Giáo viên đang trong thời gian thực tập"),
        sort_order: 4,
        roles: &["teacher"],
    },
    PositionSeed {
        code: "GVCN",
        name: "Giáo viên Chủ nhiệm",
        level: 1,
        description: Some("Giáo viên làm chủ nhiệm lớp"),
        sort_order: 5,
        roles: &["teacher"],
    },
];

pub const ACCOUNTS: &[AccountSeed] = &[
    AccountSeed {
        name: "Super Admin",
        email: "admin@example.com",
        roles: &["super-admin"],
        branches: &["HN01", "HCM01", "DN01"],
        manages: &[],
    },
    AccountSeed {
        name: "Admin Hà Nội",
        email: "admin.hn@example.com",
        roles: &["admin"],
        branches: &["HN01"],
        manages: &["HN01"],
    },
    AccountSeed {
        name: "Manager Multi-Branch",
        email: "manager.multi@example.com",
        roles: &["manager"],
        branches: &["HCM01", "DN01"],
        manages: &["HCM01"],
    },
    AccountSeed {
        name: "Staff Đà Nẵng",
        email: "staff.dn@example.com",
        roles: &["staff"],
        branches: &["DN01"],
        manages: &[],
    },
    AccountSeed {
        name: "User TP.HCM",
        email: "user.hcm@example.com",
        roles: &["user"],
        branches: &["HCM01"],
        manages: &[],
    },
];

/// Sample teachers, bound to a branch and a position.
pub const TEACHERS: &[TeacherSeed] = &[
    TeacherSeed {
        name: "Nguyễn Thị Hoa",
        email: "nguyen.hoa@school.edu.vn",
        branch: "HN01",
        position: "GV01",
        department: Some("Khoa Toán - Lý"),
    },
    TeacherSeed {
        name: "Trần Văn Nam",
        email: "tran.nam@school.edu.vn",
        branch: "HN01",
        position: "GV01",
        department: Some("Khoa Văn - Sử"),
    },
    TeacherSeed {
        name: "Lê Thị Mai",
        email: "le.mai@school.edu.vn",
        branch: "HN01",
        position: "GV02",
        department: Some("Khoa Ngoại ngữ"),
    },
    TeacherSeed {
        name: "Phạm Minh Tuấn",
        email: "pham.tuan@school.edu.vn",
        branch: "HN01",
        position: "GVCN",
        department: Some("Khoa Toán - Lý"),
    },
    TeacherSeed {
        name: "Hoàng Thị Lan",
        email: "hoang.lan@school.edu.vn",
        branch: "HN01",
        position: "GV02",
        department: Some("Khoa Văn - Sử"),
    },
    TeacherSeed {
        name: "Đặng Văn Hùng",
        email: "dang.hung@school.edu.vn",
        branch: "HN01",
        position: "GV03",
        department: Some("Khoa Ngoại ngữ"),
    },
    TeacherSeed {
        name: "Vũ Thị Thu",
        email: "vu.thu@school.edu.vn",
        branch: "HN01",
        position: "GVTT",
        department: Some("Khoa Toán - Lý"),
    },
    TeacherSeed {
        name: "Ngô Minh Châu",
        email: "ngo.chau@school.edu.vn",
        branch: "HCM01",
        position: "GV01",
        department: Some("Khoa Khoa học Tự nhiên"),
    },
    TeacherSeed {
        name: "Bùi Văn Đức",
        email: "bui.duc@school.edu.vn",
        branch: "HCM01",
        position: "GV01",
        department: Some("Khoa Xã hội"),
    },
    TeacherSeed {
        name: "Trương Thị Hằng",
        email: "truong.hang@school.edu.vn",
        branch: "HCM01",
        position: "GV02",
        department: Some("Khoa Ngoại ngữ"),
    },
    TeacherSeed {
        name: "Lý Minh Khánh",
        email: "ly.khanh@school.edu.vn",
        branch: "HCM01",
        position: "GVCN",
        department: Some("Khoa Khoa học Tự nhiên"),
    },
    TeacherSeed {
        name: "Phan Thị Ngọc",
        email: "phan.ngoc@school.edu.vn",
        branch: "HCM01",
        position: "GV02",
        department: Some("Khoa Xã hội"),
    },
    TeacherSeed {
        name: "Đinh Văn Phong",
        email: "dinh.phong@school.edu.vn",
        branch: "HCM01",
        position: "GV03",
        department: Some("Khoa Ngoại ngữ"),
    },
    TeacherSeed {
        name: "Võ Thị Quỳnh",
        email: "vo.quynh@school.edu.vn",
        branch: "DN01",
        position: "GV01",
        department: Some("Khoa Chính"),
    },
    TeacherSeed {
        name: "Dương Văn Sơn",
        email: "duong.son@school.edu.vn",
        branch: "DN01",
        position: "GV01",
        department: Some("Khoa Phụ"),
    },
    TeacherSeed {
        name: "Mai Thị Tâm",
        email: "mai.tam@school.edu.vn",
        branch: "DN01",
        position: "GV02",
        department: Some("Khoa Chính"),
    },
    TeacherSeed {
        name: "Hồ Minh Vũ",
        email: "ho.vu@school.edu.vn",
        branch: "DN01",
        position: "GVCN",
        department: Some("Khoa Phụ"),
    },
    TeacherSeed {
        name: "Lâm Thị Yến",
        email: "lam.yen@school.edu.vn",
        branch: "DN01",
        position: "GV02",
        department: Some("Khoa Chính"),
    },
];
