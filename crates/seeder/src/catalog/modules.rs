//! Module UI strings, authored as dotted `group.key` entries.

use crate::FlatEntry;

pub const ENTRIES: &[FlatEntry<'static>] = &[
    // Accounting
    ("accounting.title", &[("en", "Accounting"), ("vi", "Kế Toán")]),
    ("accounting.description", &[("en", "Description"), ("vi", "Mô tả")]),
    ("accounting.total_income", &[("en", "Total Income"), ("vi", "Tổng Thu")]),
    ("accounting.total_expense", &[("en", "Total Expense"), ("vi", "Tổng Chi")]),
    ("accounting.balance", &[("en", "Balance"), ("vi", "Số Dư")]),
    ("accounting.account_items", &[("en", "Account Items"), ("vi", "Định Khoản")]),
    ("accounting.financial_plans", &[("en", "Financial Plans"), ("vi", "Kế Hoạch Thu Chi")]),
    ("accounting.expense_proposals", &[("en", "Expense Proposals"), ("vi", "Đề Xuất Chi")]),
    ("accounting.income_reports", &[("en", "Income Reports"), ("vi", "Báo Thu")]),
    ("accounting.transactions", &[("en", "Transactions"), ("vi", "Giao Dịch")]),
    ("accounting.create", &[("en", "Create"), ("vi", "Tạo mới")]),
    ("accounting.edit", &[("en", "Edit"), ("vi", "Chỉnh sửa")]),
    ("accounting.delete", &[("en", "Delete"), ("vi", "Xóa")]),
    ("accounting.approve", &[("en", "Approve"), ("vi", "Duyệt")]),
    ("accounting.reject", &[("en", "Reject"), ("vi", "Từ chối")]),
    ("accounting.status.draft", &[("en", "Draft"), ("vi", "Nháp")]),
    ("accounting.status.pending", &[("en", "Pending"), ("vi", "Chờ duyệt")]),
    ("accounting.status.approved", &[("en", "Approved"), ("vi", "Đã duyệt")]),
    ("accounting.status.rejected", &[("en", "Rejected"), ("vi", "Đã từ chối")]),
    ("accounting.dashboard", &[("en", "Dashboard"), ("vi", "Tổng Quan")]),
    ("accounting.overview", &[("en", "View financial overview"), ("vi", "Xem tổng quan tài chính")]),
    ("accounting.account_setup", &[("en", "Account Setup"), ("vi", "Định Khoản")]),
    ("accounting.manage_categories", &[("en", "Manage categories and items"), ("vi", "Quản lý danh mục và khoản mục")]),
    ("accounting.categories", &[("en", "Categories"), ("vi", "Danh Mục")]),
    ("accounting.proposals_reports", &[("en", "Proposals & Reports"), ("vi", "Đề Xuất & Báo Thu")]),
    ("accounting.expense_income", &[("en", "Manage expense proposals and income reports"), ("vi", "Quản lý đề xuất chi và báo thu")]),
    ("accounting.approve_transactions", &[("en", "Approve Transactions"), ("vi", "Duyệt Thu Chi")]),
    ("accounting.official_records", &[("en", "Official records"), ("vi", "Ghi nhận chính thức")]),
    ("accounting.reports", &[("en", "Reports"), ("vi", "Báo Cáo")]),
    ("accounting.analysis_reports", &[("en", "Analysis and reports"), ("vi", "Báo cáo và phân tích")]),
    ("accounting.financial_report", &[("en", "Financial Report"), ("vi", "Báo Cáo Tài Chính")]),
    ("accounting.cash_flow", &[("en", "Cash Flow"), ("vi", "Dòng Tiền")]),
    ("accounting.quarterly_monthly", &[("en", "Quarterly/monthly plans"), ("vi", "Kế hoạch theo quý/tháng")]),
    ("accounting.more_coming", &[("en", "More features coming soon"), ("vi", "Thêm tính năng sắp ra mắt")]),
    ("accounting.dashboard_subtitle", &[("en", "Overview of financial status"), ("vi", "Tổng quan tình hình tài chính")]),
    ("accounting.this_month", &[("en", "This Month"), ("vi", "Tháng này")]),
    ("accounting.net_balance", &[("en", "Net Balance"), ("vi", "Số dư ròng")]),
    ("accounting.quick_actions", &[("en", "Quick Actions"), ("vi", "Thao Tác Nhanh")]),
    ("accounting.new_expense", &[("en", "New Expense"), ("vi", "Đề xuất chi mới")]),
    ("accounting.new_income", &[("en", "New Income"), ("vi", "Báo thu mới")]),
    ("accounting.new_plan", &[("en", "New Plan"), ("vi", "Kế hoạch mới")]),
    ("accounting.view_reports", &[("en", "View Reports"), ("vi", "Xem báo cáo")]),
    ("accounting.recent_activity", &[("en", "Recent Activity"), ("vi", "Hoạt Động Gần Đây")]),
    ("accounting.no_recent_activity", &[("en", "No recent activity"), ("vi", "Chưa có hoạt động nào")]),
    ("accounting.items_subtitle", &[("en", "Manage income and expense items"), ("vi", "Quản lý các khoản mục thu chi")]),
    ("accounting.add_item", &[("en", "Add Item"), ("vi", "Thêm Khoản Mục")]),
    ("accounting.search", &[("en", "Search"), ("vi", "Tìm kiếm")]),
    ("accounting.search_placeholder", &[("en", "Search by code or name..."), ("vi", "Tìm theo mã hoặc tên...")]),
    ("accounting.type", &[("en", "Type"), ("vi", "Loại")]),
    ("accounting.all_types", &[("en", "All Types"), ("vi", "Tất cả loại")]),
    ("accounting.income", &[("en", "Income"), ("vi", "Thu")]),
    ("accounting.expense", &[("en", "Expense"), ("vi", "Chi")]),
    ("accounting.status", &[("en", "Status"), ("vi", "Trạng thái")]),
    ("accounting.all_status", &[("en", "All Status"), ("vi", "Tất cả trạng thái")]),
    ("accounting.active", &[("en", "Active"), ("vi", "Đang hoạt động")]),
    ("accounting.inactive", &[("en", "Inactive"), ("vi", "Không hoạt động")]),
    ("accounting.code", &[("en", "Code"), ("vi", "Mã")]),
    ("accounting.name", &[("en", "Name"), ("vi", "Tên")]),
    ("accounting.category", &[("en", "Category"), ("vi", "Danh mục")]),
    ("accounting.actions", &[("en", "Actions"), ("vi", "Thao tác")]),
    ("accounting.loading", &[("en", "Loading..."), ("vi", "Đang tải...")]),
    ("accounting.no_items", &[("en", "No items yet"), ("vi", "Chưa có khoản mục nào")]),
    ("accounting.confirm_delete", &[("en", "Are you sure you want to delete?"), ("vi", "Bạn có chắc chắn muốn xóa?")]),
    ("accounting.delete_error", &[("en", "Error occurred while deleting"), ("vi", "Có lỗi xảy ra khi xóa")]),
    ("accounting.categories_description", &[("en", "Manage income and expense categories"), ("vi", "Quản lý các danh mục thu chi")]),
    ("accounting.plans_description", &[("en", "Create and manage quarterly/monthly financial plans"), ("vi", "Tạo và quản lý kế hoạch thu chi theo quý, tháng")]),
    ("accounting.expense_description", &[("en", "Propose expenses that need approval"), ("vi", "Đề xuất các khoản chi cần phê duyệt")]),
    ("accounting.income_description", &[("en", "Report income receipts"), ("vi", "Báo cáo các khoản thu")]),
    ("accounting.transactions_description", &[("en", "Approve and record official financial transactions"), ("vi", "Duyệt và ghi nhận các giao dịch thu chi chính thức")]),
    ("accounting.report_description", &[("en", "View comprehensive financial reports"), ("vi", "Xem báo cáo tài chính tổng hợp")]),
    ("accounting.cashflow_description", &[("en", "Track cash inflows and outflows"), ("vi", "Theo dõi dòng tiền vào ra")]),
    ("accounting.add_category", &[("en", "Add Category"), ("vi", "Thêm Danh Mục")]),
    ("accounting.edit_category", &[("en", "Edit Category"), ("vi", "Chỉnh Sửa Danh Mục")]),
    ("accounting.parent", &[("en", "Parent"), ("vi", "Danh mục cha")]),
    ("accounting.parent_category", &[("en", "Parent Category"), ("vi", "Danh mục cha")]),
    ("accounting.no_parent", &[("en", "No parent category"), ("vi", "Không có danh mục cha")]),
    ("accounting.code_placeholder", &[("en", "E.g: INC001"), ("vi", "VD: THU001")]),
    ("accounting.name_placeholder", &[("en", "e.g. Main Cash Fund"), ("vi", "Ví dụ: Quỹ tiền mặt VP")]),
    ("accounting.description_placeholder", &[("en", "Enter description (optional)"), ("vi", "Nhập mô tả (tùy chọn)")]),
    ("accounting.no_categories", &[("en", "No categories yet"), ("vi", "Chưa có danh mục nào")]),
    ("accounting.all_categories", &[("en", "All Categories"), ("vi", "Tất cả danh mục")]),
    ("accounting.edit_item", &[("en", "Edit Item"), ("vi", "Chỉnh Sửa Khoản Mục")]),
    ("accounting.select_category", &[("en", "Select category"), ("vi", "Chọn danh mục")]),
    ("accounting.add_plan", &[("en", "Add Plan"), ("vi", "Thêm Kế Hoạch")]),
    ("accounting.plans_subtitle", &[("en", "Manage quarterly/monthly financial plans"), ("vi", "Quản lý kế hoạch thu chi theo quý/tháng")]),
    ("accounting.plan_type", &[("en", "Plan Type"), ("vi", "Loại kế hoạch")]),
    ("accounting.quarterly", &[("en", "Quarterly"), ("vi", "Theo quý")]),
    ("accounting.monthly", &[("en", "Monthly"), ("vi", "Theo tháng")]),
    ("accounting.draft", &[("en", "Draft"), ("vi", "Nháp")]),
    ("accounting.pending", &[("en", "Pending"), ("vi", "Chờ duyệt")]),
    ("accounting.approved", &[("en", "Approved"), ("vi", "Đã duyệt")]),
    ("accounting.rejected", &[("en", "Rejected"), ("vi", "Đã từ chối")]),
    ("accounting.closed", &[("en", "Closed"), ("vi", "Đã đóng")]),
    ("accounting.year", &[("en", "Year"), ("vi", "Năm")]),
    ("accounting.period", &[("en", "Period"), ("vi", "Kỳ")]),
    ("accounting.no_plans", &[("en", "No plans yet"), ("vi", "Chưa có kế hoạch nào")]),
    ("accounting.view", &[("en", "View"), ("vi", "Xem")]),
    ("accounting.confirm_approve", &[("en", "Are you sure you want to approve?"), ("vi", "Bạn có chắc chắn muốn duyệt?")]),
    ("accounting.approve_error", &[("en", "Failed to approve"), ("vi", "Lỗi khi duyệt")]),
    ("accounting.add_expense", &[("en", "Add Expense"), ("vi", "Thêm Đề Xuất Chi")]),
    ("accounting.expense_proposals_subtitle", &[("en", "Manage expense proposals requiring approval"), ("vi", "Quản lý đề xuất chi cần phê duyệt")]),
    ("accounting.from_date", &[("en", "From Date"), ("vi", "Từ ngày")]),
    ("accounting.to_date", &[("en", "To Date"), ("vi", "Đến ngày")]),
    ("accounting.proposal_title", &[("en", "Title"), ("vi", "Tiêu đề")]),
    ("accounting.account_item", &[("en", "Account Item"), ("vi", "Khoản mục")]),
    ("accounting.amount", &[("en", "Amount"), ("vi", "Số tiền")]),
    ("accounting.requested_date", &[("en", "Requested Date"), ("vi", "Ngày đề xuất")]),
    ("accounting.no_proposals", &[("en", "No proposals yet"), ("vi", "Chưa có đề xuất nào")]),
    ("accounting.paid", &[("en", "Paid"), ("vi", "Đã thanh toán")]),
    ("accounting.reject_reason", &[("en", "Enter rejection reason:"), ("vi", "Nhập lý do từ chối:")]),
    ("accounting.reject_error", &[("en", "Failed to reject"), ("vi", "Lỗi khi từ chối")]),
    ("accounting.add_income", &[("en", "Add Income"), ("vi", "Thêm Báo Thu")]),
    ("accounting.income_reports_subtitle", &[("en", "Manage income reports"), ("vi", "Quản lý báo cáo thu")]),
    ("accounting.received_date", &[("en", "Received Date"), ("vi", "Ngày thu")]),
    ("accounting.payer", &[("en", "Payer"), ("vi", "Người nộp")]),
    ("accounting.no_reports", &[("en", "No reports yet"), ("vi", "Chưa có báo thu nào")]),
    ("accounting.transactions_subtitle", &[("en", "View and manage recorded transactions"), ("vi", "Xem và quản lý giao dịch đã ghi nhận")]),
    ("accounting.transaction_type", &[("en", "Transaction Type"), ("vi", "Loại giao dịch")]),
    ("accounting.transaction_date", &[("en", "Transaction Date"), ("vi", "Ngày giao dịch")]),
    ("accounting.payment_method", &[("en", "Payment Method"), ("vi", "Phương thức")]),
    ("accounting.select_payment_method", &[("en", "Select Payment Method"), ("vi", "Chọn phương thức thanh toán")]),
    ("accounting.cash", &[("en", "Cash"), ("vi", "Tiền mặt")]),
    ("accounting.bank_transfer", &[("en", "Bank Transfer"), ("vi", "Chuyển khoản")]),
    ("accounting.check", &[("en", "Check"), ("vi", "Séc")]),
    ("accounting.credit_card", &[("en", "Credit Card"), ("vi", "Thẻ tín dụng")]),
    ("accounting.other", &[("en", "Other"), ("vi", "Khác")]),
    ("accounting.no_transactions", &[("en", "No transactions yet"), ("vi", "Chưa có giao dịch nào")]),
    ("accounting.export", &[("en", "Export"), ("vi", "Xuất Excel")]),
    ("accounting.export_error", &[("en", "Error exporting data"), ("vi", "Lỗi khi xuất dữ liệu")]),
    ("accounting.monthly_trend", &[("en", "Monthly Trend"), ("vi", "Xu Hướng Theo Tháng")]),
    ("accounting.category_breakdown", &[("en", "Category Breakdown"), ("vi", "Phân Tích Theo Danh Mục")]),
    ("accounting.uncategorized", &[("en", "Uncategorized"), ("vi", "Không phân loại")]),
    ("accounting.cancel", &[("en", "Cancel"), ("vi", "Hủy")]),
    ("accounting.save", &[("en", "Save"), ("vi", "Lưu")]),
    ("accounting.saving", &[("en", "Saving..."), ("vi", "Đang lưu...")]),
    ("accounting.save_error", &[("en", "Failed to save"), ("vi", "Lỗi khi lưu")]),
    ("accounting.month_1", &[("en", "January"), ("vi", "Tháng 1")]),
    ("accounting.month_2", &[("en", "February"), ("vi", "Tháng 2")]),
    ("accounting.month_3", &[("en", "March"), ("vi", "Tháng 3")]),
    ("accounting.month_4", &[("en", "April"), ("vi", "Tháng 4")]),
    ("accounting.month_5", &[("en", "May"), ("vi", "Tháng 5")]),
    ("accounting.month_6", &[("en", "June"), ("vi", "Tháng 6")]),
    ("accounting.month_7", &[("en", "July"), ("vi", "Tháng 7")]),
    ("accounting.month_8", &[("en", "August"), ("vi", "Tháng 8")]),
    ("accounting.month_9", &[("en", "September"), ("vi", "Tháng 9")]),
    ("accounting.month_10", &[("en", "October"), ("vi", "Tháng 10")]),
    ("accounting.month_11", &[("en", "November"), ("vi", "Tháng 11")]),
    ("accounting.month_12", &[("en", "December"), ("vi", "Tháng 12")]),
    ("accounting.quarter", &[("en", "Quarter"), ("vi", "Quý")]),
    ("accounting.month", &[("en", "Month"), ("vi", "Tháng")]),
    ("accounting.plan_items", &[("en", "Plan Items"), ("vi", "Các Khoản Mục Kế Hoạch")]),
    ("accounting.planned_amount", &[("en", "Planned Amount"), ("vi", "Số tiền kế hoạch")]),
    ("accounting.total_income_planned", &[("en", "Total Income Planned"), ("vi", "Tổng Thu Kế Hoạch")]),
    ("accounting.total_expense_planned", &[("en", "Total Expense Planned"), ("vi", "Tổng Chi Kế Hoạch")]),
    ("accounting.create_plan", &[("en", "Create Plan"), ("vi", "Tạo Kế Hoạch")]),
    ("accounting.edit_plan", &[("en", "Edit Plan"), ("vi", "Chỉnh Sửa Kế Hoạch")]),
    ("accounting.view_plan", &[("en", "View Plan"), ("vi", "Xem Kế Hoạch")]),
    ("accounting.close", &[("en", "Close"), ("vi", "Đóng")]),
    ("accounting.submit_for_approval", &[("en", "Submit for Approval"), ("vi", "Gửi duyệt")]),
    ("accounting.confirm_submit", &[("en", "Are you sure you want to submit this plan for approval?"), ("vi", "Bạn có chắc muốn gửi kế hoạch này để duyệt?")]),
    ("accounting.submit", &[("en", "Submit"), ("vi", "Gửi")]),
    ("accounting.submit_error", &[("en", "Error submitting plan"), ("vi", "Lỗi khi gửi kế hoạch")]),
    ("accounting.plan_submitted", &[("en", "Plan submitted for approval successfully!"), ("vi", "Đã gửi kế hoạch để duyệt thành công!")]),
    ("accounting.plan_approved", &[("en", "Plan approved successfully!"), ("vi", "Đã duyệt kế hoạch thành công!")]),
    ("accounting.plan_deleted", &[("en", "Plan deleted successfully!"), ("vi", "Đã xóa kế hoạch thành công!")]),
    ("accounting.delete_warning", &[("en", "This action cannot be undone!"), ("vi", "Hành động này không thể hoàn tác!")]),
    ("accounting.success", &[("en", "Success"), ("vi", "Thành công")]),
    ("accounting.error", &[("en", "Error"), ("vi", "Lỗi")]),
    ("accounting.total", &[("en", "Total"), ("vi", "Tổng cộng")]),
    ("accounting.approved_info", &[("en", "Approval Information"), ("vi", "Thông Tin Duyệt")]),
    ("accounting.approved_by", &[("en", "Approved By"), ("vi", "Người duyệt")]),
    ("accounting.approved_at", &[("en", "Approved At"), ("vi", "Ngày duyệt")]),
    ("accounting.plan_name_placeholder", &[("en", "E.g: Q1/2025 Plan"), ("vi", "VD: Kế hoạch Q1/2025")]),
    ("accounting.no_plan_items", &[("en", "No items yet. Click \"Add Item\" to start."), ("vi", "Chưa có khoản mục nào. Click \"Thêm Khoản Mục\" để bắt đầu.")]),
    ("accounting.select_item", &[("en", "Select item"), ("vi", "Chọn khoản mục")]),
    ("accounting.select_plan_item", &[("en", "Select plan item"), ("vi", "Chọn khoản mục kế hoạch")]),
    ("accounting.select_plan", &[("en", "Select financial plan"), ("vi", "Chọn kế hoạch tài chính")]),
    ("accounting.financial_plan", &[("en", "Financial Plan"), ("vi", "Kế hoạch tài chính")]),
    ("accounting.unplanned", &[("en", "Unplanned"), ("vi", "Ngoài kế hoạch")]),
    ("accounting.plan_optional_hint", &[("en", "Leave empty if not part of any plan"), ("vi", "Để trống nếu không thuộc kế hoạch nào")]),
    ("accounting.expense_plan_required_hint", &[("en", "Expense proposals must belong to a financial plan"), ("vi", "Đề xuất chi bắt buộc phải thuộc một kế hoạch tài chính")]),
    ("accounting.showing_plan_items", &[("en", "Showing only items from selected plan"), ("vi", "Chỉ hiển thị các khoản mục trong kế hoạch đã chọn")]),
    ("accounting.expense_item", &[("en", "Expense Item"), ("vi", "Hạng Mục Chi")]),
    ("accounting.expense_from_plan_hint", &[("en", "Select item from approved plan"), ("vi", "Chọn hạng mục từ kế hoạch đã duyệt")]),
    ("accounting.cash_account", &[("en", "Cash Account"), ("vi", "Tài Khoản Chi")]),
    ("accounting.select_cash_account", &[("en", "Select account"), ("vi", "Chọn tài khoản")]),
    ("accounting.cash_account_hint", &[("en", "Which account will pay this expense"), ("vi", "Tài khoản nào sẽ chi tiền này")]),
    ("accounting.budget_status", &[("en", "Budget Status"), ("vi", "Tình Trạng Ngân Sách")]),
    ("accounting.planned", &[("en", "Planned"), ("vi", "Kế hoạch")]),
    ("accounting.remaining", &[("en", "Remaining"), ("vi", "Còn lại")]),
    ("accounting.over_budget", &[("en", "Over Budget"), ("vi", "Vượt ngân sách")]),
    ("accounting.select_plan_first", &[("en", "Select plan first"), ("vi", "Chọn kế hoạch trước")]),
    ("accounting.items_available", &[("en", "items available"), ("vi", "hạng mục có sẵn")]),
    ("accounting.no_expense_items_in_plan", &[("en", "This plan has no expense items"), ("vi", "Kế hoạch này không có hạng mục chi")]),
    ("accounting.no_cash_accounts", &[("en", "No cash accounts yet."), ("vi", "Chưa có tài khoản nào.")]),
    ("accounting.create_now", &[("en", "Create now"), ("vi", "Tạo ngay")]),
    ("accounting.create_cash_account", &[("en", "Create Cash Account"), ("vi", "Tạo Tài Khoản")]),
    ("accounting.edit_cash_account", &[("en", "Edit Cash Account"), ("vi", "Sửa Tài Khoản")]),
    ("accounting.account_number", &[("en", "Account Number"), ("vi", "Số tài khoản")]),
    ("accounting.account_number_placeholder", &[("en", "e.g. 0123456789"), ("vi", "Ví dụ: 0123456789")]),
    ("accounting.bank_name", &[("en", "Bank Name"), ("vi", "Tên ngân hàng")]),
    ("accounting.bank_name_placeholder", &[("en", "e.g. Vietcombank"), ("vi", "Ví dụ: Vietcombank")]),
    ("accounting.initial_balance", &[("en", "Initial Balance"), ("vi", "Số dư ban đầu")]),
    ("accounting.amount_placeholder", &[("en", "Enter amount"), ("vi", "Nhập số tiền")]),
    ("accounting.proposal_saved", &[("en", "Proposal saved successfully"), ("vi", "Lưu đề xuất thành công")]),
    ("accounting.cash_account_saved", &[("en", "Cash account saved successfully"), ("vi", "Lưu tài khoản thành công")]),
    ("accounting.delete_confirm_text", &[("en", "Delete"), ("vi", "Xóa")]),
    ("accounting.confirm", &[("en", "Confirm"), ("vi", "Xác nhận")]),
    ("accounting.expense_proposal_details", &[("en", "Expense Proposal Details"), ("vi", "Chi Tiết Đề Xuất Chi")]),
    ("accounting.approve_proposal", &[("en", "Approve proposal"), ("vi", "Duyệt đề xuất")]),
    ("accounting.reject_proposal", &[("en", "Reject proposal"), ("vi", "Từ chối đề xuất")]),
    ("accounting.proposal_approved", &[("en", "Proposal approved"), ("vi", "Đã duyệt đề xuất")]),
    ("accounting.proposal_rejected", &[("en", "Proposal rejected"), ("vi", "Đã từ chối đề xuất")]),
    ("accounting.reject_reason_placeholder", &[("en", "Enter rejection reason..."), ("vi", "Nhập lý do từ chối...")]),
    ("accounting.reject_reason_required", &[("en", "Please enter a reason"), ("vi", "Vui lòng nhập lý do")]),
    ("accounting.rejected_by", &[("en", "Rejected by"), ("vi", "Người từ chối")]),
    ("accounting.rejected_at", &[("en", "Rejected at"), ("vi", "Ngày từ chối")]),
    ("accounting.payment_info", &[("en", "Payment Information"), ("vi", "Thông Tin Thanh Toán")]),
    ("accounting.verified", &[("en", "Verified"), ("vi", "Đã xác minh")]),
    ("accounting.verify", &[("en", "Verify"), ("vi", "Xác minh")]),
    ("accounting.income_report_details", &[("en", "Income Report Details"), ("vi", "Chi Tiết Báo Thu")]),
    ("accounting.approve_income", &[("en", "Approve income report"), ("vi", "Duyệt báo thu")]),
    ("accounting.reject_income", &[("en", "Reject income report"), ("vi", "Từ chối báo thu")]),
    ("accounting.verify_income", &[("en", "Verify income report"), ("vi", "Xác minh báo thu")]),
    ("accounting.income_approved", &[("en", "Income report approved. Waiting for cashier verification"), ("vi", "Đã duyệt báo thu. Chờ thủ quỹ xác minh")]),
    ("accounting.income_verified", &[("en", "Verified and transaction completed"), ("vi", "Đã xác minh và hoàn tất giao dịch")]),
    ("accounting.income_rejected", &[("en", "Income report rejected"), ("vi", "Đã từ chối báo thu")]),
    ("accounting.verify_error", &[("en", "Failed to verify"), ("vi", "Lỗi khi xác minh")]),
    ("accounting.verified_by", &[("en", "Verified by"), ("vi", "Người xác minh")]),
    ("accounting.verified_at", &[("en", "Verified at"), ("vi", "Ngày xác minh")]),
    ("accounting.select_receiving_account", &[("en", "Select receiving account"), ("vi", "Chọn tài khoản nhận tiền")]),
    ("accounting.receiving_account_required", &[("en", "Please select an account"), ("vi", "Vui lòng chọn tài khoản")]),
    ("accounting.payer_name", &[("en", "Payer Name"), ("vi", "Tên người nộp")]),
    ("accounting.payer_phone", &[("en", "Phone Number"), ("vi", "Số điện thoại")]),
    ("accounting.reported_by", &[("en", "Reported by"), ("vi", "Người báo thu")]),
    ("accounting.verification_info", &[("en", "Verification Information"), ("vi", "Thông Tin Xác Minh")]),
    ("accounting.plan_item", &[("en", "Plan Item"), ("vi", "Khoản mục kế hoạch")]),
    ("accounting.approve_transaction", &[("en", "Approve Transaction"), ("vi", "Duyệt Giao Dịch")]),
    ("accounting.transaction_approved", &[("en", "Transaction approved"), ("vi", "Đã duyệt giao dịch")]),
    ("accounting.transaction_rejected", &[("en", "Transaction rejected"), ("vi", "Đã từ chối giao dịch")]),
    ("accounting.select_payment_account", &[("en", "Select payment account"), ("vi", "Chọn tài khoản thanh toán")]),
    ("accounting.select_account", &[("en", "Select account"), ("vi", "Chọn tài khoản")]),
    ("accounting.transaction_details", &[("en", "Transaction Details"), ("vi", "Chi Tiết Giao Dịch")]),
    ("accounting.date", &[("en", "Date"), ("vi", "Ngày")]),
    ("accounting.cash_account_already_selected", &[("en", "Cash account was already selected when creating the proposal"), ("vi", "Tài khoản đã được chọn từ khi tạo phiếu")]),
    ("accounting.can_only_approve_pending", &[("en", "Can only approve pending transactions"), ("vi", "Chỉ có thể duyệt giao dịch đang chờ")]),
    ("accounting.create_expense_proposal", &[("en", "Create Expense Proposal"), ("vi", "Tạo Đề Xuất Chi")]),
    ("accounting.edit_expense_proposal", &[("en", "Edit Expense Proposal"), ("vi", "Chỉnh Sửa Đề Xuất Chi")]),
    ("accounting.create_income_report", &[("en", "Create Income Report"), ("vi", "Tạo Báo Thu")]),
    ("accounting.edit_income_report", &[("en", "Edit Income Report"), ("vi", "Chỉnh Sửa Báo Thu")]),
    ("accounting.title_placeholder", &[("en", "E.g: Electricity bill November"), ("vi", "VD: Tiền điện tháng 11")]),
    ("accounting.payment_date", &[("en", "Payment Date"), ("vi", "Ngày thanh toán")]),
    ("accounting.select_method", &[("en", "Select method"), ("vi", "Chọn phương thức")]),
    ("accounting.card", &[("en", "Card"), ("vi", "Thẻ")]),
    ("accounting.payment_ref", &[("en", "Reference"), ("vi", "Mã tham chiếu")]),
    ("accounting.payment_ref_placeholder", &[("en", "Transaction ID, invoice number..."), ("vi", "Mã GD, số hóa đơn...")]),
    ("accounting.payer_info", &[("en", "Payer Information"), ("vi", "Thông Tin Người Nộp")]),
    ("accounting.payer_name_placeholder", &[("en", "Full name"), ("vi", "Họ và tên")]),
    ("accounting.payer_phone_placeholder", &[("en", "0912345678"), ("vi", "0912345678")]),
    ("accounting.payer_additional_info", &[("en", "Additional Info"), ("vi", "Thông tin bổ sung")]),
    ("accounting.payer_additional_info_placeholder", &[("en", "Email, address, notes..."), ("vi", "Email, địa chỉ, ghi chú...")]),
    ("accounting.notes", &[("en", "Notes"), ("vi", "Ghi chú")]),
    ("accounting.notes_placeholder", &[("en", "Additional notes (optional)"), ("vi", "Ghi chú thêm (tùy chọn)")]),
    ("accounting.cost_type", &[("en", "Cost Type"), ("vi", "Phân loại chi phí")]),
    ("accounting.fixed", &[("en", "Fixed Cost"), ("vi", "Định phí")]),
    ("accounting.variable", &[("en", "Variable Cost"), ("vi", "Biến phí")]),
    ("accounting.infrastructure", &[("en", "Infrastructure"), ("vi", "Đầu tư CSVC")]),
    ("accounting.all_cost_types", &[("en", "All Cost Types"), ("vi", "Tất cả loại chi phí")]),
    ("accounting.select_cost_type", &[("en", "Select cost type"), ("vi", "Chọn loại chi phí")]),
    ("accounting.budget_planning", &[("en", "Budget Planning"), ("vi", "Lập kế hoạch ngân sách")]),

    // Branches
    ("branches.title", &[("en", "Branches"), ("vi", "Chi nhánh")]),
    ("branches.list", &[("en", "Branch List"), ("vi", "Danh sách chi nhánh")]),
    ("branches.create", &[("en", "Create Branch"), ("vi", "Tạo chi nhánh")]),
    ("branches.edit", &[("en", "Edit Branch"), ("vi", "Sửa chi nhánh")]),
    ("branches.delete", &[("en", "Delete Branch"), ("vi", "Xóa chi nhánh")]),
    ("branches.name", &[("en", "Branch Name"), ("vi", "Tên chi nhánh")]),
    ("branches.code", &[("en", "Branch Code"), ("vi", "Mã chi nhánh")]),
    ("branches.address", &[("en", "Address"), ("vi", "Địa chỉ")]),
    ("branches.phone", &[("en", "Phone"), ("vi", "Số điện thoại")]),
    ("branches.email", &[("en", "Email"), ("vi", "Email")]),
    ("branches.manager", &[("en", "Manager"), ("vi", "Quản lý")]),
    ("branches.status", &[("en", "Status"), ("vi", "Trạng thái")]),
    ("branches.active", &[("en", "Active"), ("vi", "Hoạt động")]),
    ("branches.inactive", &[("en", "Inactive"), ("vi", "Không hoạt động")]),

    // Academic years
    ("academic_years.title", &[("en", "Academic Years"), ("vi", "Năm học")]),
    ("academic_years.create", &[("en", "Create Academic Year"), ("vi", "Tạo năm học")]),
    ("academic_years.edit", &[("en", "Edit Academic Year"), ("vi", "Sửa năm học")]),
    ("academic_years.name", &[("en", "Year Name"), ("vi", "Tên năm học")]),
    ("academic_years.code", &[("en", "Code"), ("vi", "Mã")]),
    ("academic_years.start_date", &[("en", "Start Date"), ("vi", "Ngày bắt đầu")]),
    ("academic_years.end_date", &[("en", "End Date"), ("vi", "Ngày kết thúc")]),
    ("academic_years.is_current", &[("en", "Current Year"), ("vi", "Năm học hiện tại")]),

    // Semesters
    ("semesters.title", &[("en", "Semesters"), ("vi", "Học kỳ")]),
    ("semesters.create", &[("en", "Create Semester"), ("vi", "Tạo học kỳ")]),
    ("semesters.name", &[("en", "Semester Name"), ("vi", "Tên học kỳ")]),
    ("semesters.total_weeks", &[("en", "Total Weeks"), ("vi", "Tổng số tuần")]),

    // Study periods
    ("study_periods.title", &[("en", "Study Periods"), ("vi", "Ca học")]),
    ("study_periods.create", &[("en", "Create Study Period"), ("vi", "Tạo ca học")]),
    ("study_periods.name", &[("en", "Period Name"), ("vi", "Tên ca học")]),
    ("study_periods.start_time", &[("en", "Start Time"), ("vi", "Giờ bắt đầu")]),
    ("study_periods.end_time", &[("en", "End Time"), ("vi", "Giờ kết thúc")]),
    ("study_periods.lesson_duration", &[("en", "Lesson Duration (minutes)"), ("vi", "Thời lượng tiết học (phút)")]),
    ("study_periods.break_duration", &[("en", "Break Duration (minutes)"), ("vi", "Thời gian nghỉ (phút)")]),

    // Rooms
    ("rooms.title", &[("en", "Rooms"), ("vi", "Phòng học")]),
    ("rooms.create", &[("en", "Create Room"), ("vi", "Tạo phòng học")]),
    ("rooms.name", &[("en", "Room Name"), ("vi", "Tên phòng")]),
    ("rooms.building", &[("en", "Building"), ("vi", "Tòa nhà")]),
    ("rooms.floor", &[("en", "Floor"), ("vi", "Tầng")]),
    ("rooms.capacity", &[("en", "Capacity"), ("vi", "Sức chứa")]),
    ("rooms.room_type", &[("en", "Room Type"), ("vi", "Loại phòng")]),
    ("rooms.is_available", &[("en", "Available"), ("vi", "Có sẵn")]),

    // Holidays
    ("holidays.title", &[("en", "Holidays"), ("vi", "Lịch nghỉ")]),
    ("holidays.create", &[("en", "Create Holiday"), ("vi", "Tạo lịch nghỉ")]),
    ("holidays.name", &[("en", "Holiday Name"), ("vi", "Tên ngày nghỉ")]),
    ("holidays.type", &[("en", "Type"), ("vi", "Loại")]),
    ("holidays.total_days", &[("en", "Total Days"), ("vi", "Số ngày nghỉ")]),
    ("holidays.affects_schedule", &[("en", "Affects Schedule"), ("vi", "Ảnh hưởng lịch học")]),

    // Classes
    ("classes.title", &[("en", "Classes"), ("vi", "Lớp học")]),
    ("classes.settings_title", &[("en", "Class Settings"), ("vi", "Thiết lập Lớp học")]),
    ("classes.settings_description", &[("en", "Manage academic years, semesters, study periods, rooms and holidays"), ("vi", "Quản lý năm học, học kỳ, ca học, phòng học và lịch nghỉ")]),
    ("classes.create", &[("en", "Create Class"), ("vi", "Tạo lớp học")]),
    ("classes.edit", &[("en", "Edit Class"), ("vi", "Sửa lớp học")]),
    ("classes.name", &[("en", "Class Name"), ("vi", "Tên lớp")]),
    ("classes.code", &[("en", "Class Code"), ("vi", "Mã lớp")]),
    ("classes.homeroom_teacher", &[("en", "Homeroom Teacher"), ("vi", "Giáo viên chủ nhiệm")]),
    ("classes.semester", &[("en", "Semester"), ("vi", "Học kỳ")]),
    ("classes.lesson_plan", &[("en", "Lesson Plan"), ("vi", "Giáo án")]),
    ("classes.total_sessions", &[("en", "Total Sessions"), ("vi", "Tổng số buổi")]),
    ("classes.completed_sessions", &[("en", "Completed Sessions"), ("vi", "Buổi đã học")]),
    ("classes.level", &[("en", "Level"), ("vi", "Cấp học")]),
    ("classes.capacity", &[("en", "Max Capacity"), ("vi", "Sĩ số tối đa")]),
    ("classes.current_students", &[("en", "Current Students"), ("vi", "Sĩ số hiện tại")]),
    ("classes.schedule", &[("en", "Schedule"), ("vi", "Lịch học")]),
    ("classes.create_schedule", &[("en", "Create Schedule"), ("vi", "Tạo lịch học")]),
    ("classes.generate_sessions", &[("en", "Generate Sessions"), ("vi", "Tạo buổi học")]),
    ("classes.teacher_conflict", &[("en", "Teacher Conflict"), ("vi", "Giáo viên bị trùng lịch")]),
    ("classes.room_conflict", &[("en", "Room Conflict"), ("vi", "Phòng học bị trùng")]),
    ("classes.status", &[("en", "Status"), ("vi", "Trạng thái")]),
    ("classes.status_draft", &[("en", "Draft"), ("vi", "Nháp")]),
    ("classes.status_active", &[("en", "Active"), ("vi", "Đang học")]),
    ("classes.status_paused", &[("en", "Paused"), ("vi", "Tạm dừng")]),
    ("classes.status_completed", &[("en", "Completed"), ("vi", "Hoàn thành")]),
    ("classes.status_cancelled", &[("en", "Cancelled"), ("vi", "Đã hủy")]),
    ("classes.status_draft_hint", &[("en", "Class is being prepared, not yet open"), ("vi", "Lớp đang chuẩn bị, chưa mở")]),
    ("classes.status_active_hint", &[("en", "Class is active, attendance available"), ("vi", "Lớp đang hoạt động, có thể điểm danh")]),
    ("classes.status_paused_hint", &[("en", "Class is paused, attendance disabled"), ("vi", "Lớp tạm dừng, không thể điểm danh")]),
    ("classes.status_completed_hint", &[("en", "Class completed all sessions"), ("vi", "Lớp đã hoàn thành tất cả buổi học")]),
    ("classes.status_cancelled_hint", &[("en", "Class has been cancelled"), ("vi", "Lớp đã bị hủy")]),
    ("classes.subject", &[("en", "Subject"), ("vi", "Môn học")]),
    ("classes.start_date", &[("en", "Start Date"), ("vi", "Ngày bắt đầu")]),
    ("classes.hourly_rate", &[("en", "Hourly Rate"), ("vi", "Học phí/giờ")]),
    ("classes.day_of_week", &[("en", "Day of Week"), ("vi", "Thứ")]),
    ("classes.study_period", &[("en", "Study Period"), ("vi", "Ca học")]),
    ("classes.teacher", &[("en", "Teacher"), ("vi", "Giáo viên")]),
    ("classes.room", &[("en", "Room"), ("vi", "Phòng học")]),
    ("classes.add_schedule", &[("en", "Add Schedule"), ("vi", "Thêm lịch học")]),
    ("classes.select_subject_first", &[("en", "Please select subject first"), ("vi", "Vui lòng chọn môn học trước")]),
    ("classes.management_title", &[("en", "Class Management"), ("vi", "Quản lý Lớp học")]),
    ("classes.management_description", &[("en", "Manage classes, schedules and sessions"), ("vi", "Quản lý lớp học, lịch học và buổi học")]),
    ("classes.settings", &[("en", "Settings"), ("vi", "Thiết lập")]),
    ("classes.create_class", &[("en", "Create Class"), ("vi", "Tạo lớp học")]),
    ("classes.class_name", &[("en", "Class Name"), ("vi", "Tên lớp")]),
    ("classes.homeroom_teacher_short", &[("en", "Homeroom Teacher"), ("vi", "GVCN")]),
    ("classes.sessions", &[("en", "Sessions"), ("vi", "Số buổi")]),
    ("classes.edit_class", &[("en", "Edit Class"), ("vi", "Sửa lớp học")]),
    ("classes.create_new_class", &[("en", "Create New Class"), ("vi", "Tạo lớp học mới")]),
    ("classes.view_details", &[("en", "View"), ("vi", "Xem")]),
    ("classes.students_count", &[("en", "Students"), ("vi", "Sĩ số")]),
    ("classes.sessions_progress", &[("en", "Progress"), ("vi", "Tiến độ")]),
    ("classes.no_classes", &[("en", "No classes yet"), ("vi", "Chưa có lớp học nào")]),
    ("classes.no_schedules", &[("en", "No schedules yet"), ("vi", "Chưa có lịch học nào")]),
    ("classes.schedule_change_warning", &[("en", "You have changed the class schedule"), ("vi", "Bạn đã thay đổi lịch học của lớp")]),
    ("classes.schedule_recalculate_note", &[("en", "System will automatically recalculate upcoming sessions"), ("vi", "Hệ thống sẽ tự động tính toán lại các buổi học chưa diễn ra")]),
    ("classes.completed_sessions_safe", &[("en", "Attended sessions will not be affected"), ("vi", "Các buổi học đã điểm danh sẽ không bị ảnh hưởng")]),
    ("classes.class_created", &[("en", "Class created successfully"), ("vi", "Đã tạo lớp học thành công")]),
    ("classes.class_updated", &[("en", "Class updated successfully"), ("vi", "Đã cập nhật lớp học thành công")]),
    ("classes.load_error", &[("en", "Cannot load classes list"), ("vi", "Không thể tải danh sách lớp học")]),
    ("classes.delete_confirm_title", &[("en", "Confirm Delete?"), ("vi", "Xác nhận xóa?")]),
    ("classes.delete_confirm_text", &[("en", "Are you sure you want to delete class \"{name}\"?"), ("vi", "Bạn có chắc muốn xóa lớp \"{name}\"?")]),
    ("classes.class_deleted", &[("en", "Class deleted"), ("vi", "Đã xóa lớp học")]),
    ("classes.delete_error", &[("en", "Cannot delete class"), ("vi", "Không thể xóa lớp học")]),

    // Lesson plans
    ("lesson_plans.title", &[("en", "Lesson Plans"), ("vi", "Giáo án")]),
    ("lesson_plans.create", &[("en", "Create Lesson Plan"), ("vi", "Tạo giáo án")]),
    ("lesson_plans.edit", &[("en", "Edit Lesson Plan"), ("vi", "Sửa giáo án")]),
    ("lesson_plans.name", &[("en", "Plan Name"), ("vi", "Tên giáo án")]),
    ("lesson_plans.subject", &[("en", "Subject"), ("vi", "Môn học")]),
    ("lesson_plans.total_sessions", &[("en", "Total Sessions"), ("vi", "Tổng số buổi")]),
    ("lesson_plans.status", &[("en", "Status"), ("vi", "Trạng thái")]),
    ("lesson_plans.sessions", &[("en", "Sessions List"), ("vi", "Danh sách buổi học")]),
    ("lesson_plans.add_session", &[("en", "Add Session"), ("vi", "Thêm buổi học")]),
    ("lesson_plans.session_number", &[("en", "Session Number"), ("vi", "Buổi số")]),
    ("lesson_plans.lesson_title", &[("en", "Lesson Title"), ("vi", "Tiêu đề bài học")]),
    ("lesson_plans.lesson_objectives", &[("en", "Objectives"), ("vi", "Mục tiêu")]),
    ("lesson_plans.lesson_content", &[("en", "Content"), ("vi", "Nội dung")]),
    ("lesson_plans.lesson_plan_url", &[("en", "Lesson Plan URL"), ("vi", "Link Giáo án")]),
    ("lesson_plans.materials_url", &[("en", "Materials URL"), ("vi", "Link Tài liệu")]),
    ("lesson_plans.homework_url", &[("en", "Homework URL"), ("vi", "Link Bài tập")]),
];
