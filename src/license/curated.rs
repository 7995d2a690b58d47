//! Hand-maintained alias dictionary and ignore list.
//!
//! These tables capture abbreviations, typos and historical names that the
//! SPDX registry cannot express. Entry order is match priority: versioned and
//! specific patterns sit before generic fallbacks (`BSD-2-Clause` before the
//! bare `BSD` of `BSD-4-Clause`, `LGPL-2.1` before the bare `LGPL`).
//!
//! Patterns are case-insensitive unless prefixed with `(?-i)`. The regex
//! engine has no look-around, so "version not followed by a dot" is spelled
//! `(?:[^.\w]|$)`.

use crate::license::rules::{IgnoreList, RuleSet};

/// Strings that are known not to name a license.
pub const IGNORE_PATTERNS: &[&str] = &[
    r"\bProprietary\b",
    r"\bOther/Proprietary\b",
    r"\bLICEN[CS]E\.\w{2,8}\b",
    r"^LICEN[CS]ING\.\w{2,8}\b",
    r"^COPYING\.\w{2,8}",
    r"\bDFSG\s+APPROVED\b",
    r"\bSee\s+license\s+in\s+package\b",
    r"\bFree\s+for\s+non-?commercial\b",
    r"\bFree\s+To\s+Use\b",
    r"\bFree\s+For\s+Home\s+Use\b",
    r"\bFree\s+For\s+Educational\b",
    r"^Freely\s+Distributable$",
    r"^COPYRIGHT\s+\d{2,4}",
    r"^Copyright\s+\(c\)\s+\d{2,4}\b",
    r"^COPYRIGHT$",
    r"^COPYRIGHT\.\w{2,8}\b",
    r"(?-i)^\(c\)\s+\d{2,4}\d",
    r"^LICENSE$",
    r"^FREE$",
    r"^See\s+License$",
    r"^TODO$",
    r"^FREEWARE$",
    r"^All\s+rights\s+reserved$",
    r"^COPYING$",
    r"^OTHER$",
    r"^NONE$",
    r"^DUAL$",
    r"^KEEP\s+IT\s+REAL$",
    r"\bSee\s+LICENSE\s+file\b",
    r"^LICEN[CS]E$",
    r"^PUBLIC$",
    r"^see\s+file\s+LICENSE$",
    r"^__license__$",
    r"^GNU$",
    r"^GNU[-\s]?v3$",
    r"^OSI\s+Approved$",
    r"^OSI$",
    r"^https?://github\.com",
];

/// Curated `(spdx_id, patterns)` table in priority order.
pub const CURATED_RULES: &[(&str, &[&str])] = &[
    ("AAL", &[r"\bAAL\b", r"\bAAL\s+License\b", r"\bAttribution\s+Assurance\s+License\b"]),
    ("AFL-1.1", &[r"\bAFL[-v]?1(?:[^.\w]|$)", r"\bAFL[-v]?1\.1\b"]),
    ("AFL-1.2", &[r"\bAFL[-v]?1\.2\b"]),
    ("AFL-2.0", &[r"\bAFL[-v]?2(?:[^.\w]|$)", r"\bAFL[-v]?2\.0\b"]),
    ("AFL-2.1", &[r"\bAFL[-v]?2\.1\b"]),
    (
        "AFL-3.0",
        &[
            r"\bAFL[-v]?3",
            r"\bAcademic\s+Free\s+License\b",
            r"^AFL$",
            r"\bhttps?://opensource\.org/licenses/academic\.php\b",
        ],
    ),
    (
        "AGPL-1.0",
        &[
            r"\bAGPL[-v_\s]?1\.0\b",
            r"\bAGPL[-v_\s]1\b",
            r"\bAGPL[-_v]?2\b",
            r"\bAffero\s+General\s+Public\s+License\s+v?1\b",
            // bare "AGPL" without a version
            r"\bAGPL(?:\s+[^v\d\s]|\s*$)",
        ],
    ),
    (
        "AGPL-3.0",
        &[
            r"\bAGPL[-_\s]?3\.0\b",
            r"\bAGPL[-v_]?3",
            r"\bAGPL\s+v?3\b",
            r"\bAPGLv?3\b",
            r"\bGNU\s+Affero\s+General\s+Public\s+License\s+v?3",
            r"\bAFFERO\s+GNU\s+PUBLIC\s+LICENSE\s+v3\b",
            r"\bGnu\s+Affero\s+Public\s+License\s+v3+?\b",
            r"(?-i)\bAFFERO GENERAL PUBLIC\b",
            r"^AFFERO$",
        ],
    ),
    ("Apache-1.0", &[r"\bAPACHE[-_\s]?v?1(?:[^.\w]|$)", r"\bAPACHE[-\s]?v?1\.0\b"]),
    ("Apache-1.1", &[r"\bAPACHE[-_\s]?v?1\.1\b"]),
    (
        "Apache-2.0",
        &[
            r"\bAPACHE[-_\s]?v?2\b",
            r"\bAPACHE\s+2\.0\b",
            r"\bAPACHE\s+LICEN[CS]E\s+(?:VERSION\s+)?v?2\b",
            r"\bAPL\s+2\.0\b",
            r"\bAPL[.\-v]?2\b",
            r"\bASL\s+2\.0\b",
            r"\bASL[-v\s]?2\b",
            r"\bALv2\b",
            r"\bASF[-\s]?2\.0\b",
            r"\bAPACHE[^-v_\s]\b",
            r"^ASL$",
            r"^APACHE$",
        ],
    ),
    ("APL-1.0", &[r"\bAPL[-_\s]?v?1\b", r"\bAPL[-_\s]?v?1\.0\b", r"^APL$"]),
    (
        "APSL-1.0",
        &[
            r"\bAPSL[-_\s]?v?1\.0\b",
            r"\bAPSL[-_\s]?v?1(?:[^.\w]|$)",
            r"\bAPPLE\s+PUBLIC\s+SOURCE\b",
        ],
    ),
    ("APSL-1.1", &[r"\bAPSL[-_\s]?v?1\.1\b"]),
    ("APSL-1.2", &[r"\bAPSL[-_\s]?v?1\.2\b"]),
    ("APSL-2.0", &[r"\bAPSL[-_\s]?v?2\.0\b", r"\bAPSL[-_\s]?v?2\b"]),
    ("Artistic-1.0-Perl", &[r"\bArtistic[-_\s]?v?1\.0-Perl\b", r"\bPerlArtistic\b"]),
    ("Artistic-1.0", &[r"\bArtistic[-_\s]?v?1\.0\b", r"\bArtistic[-_\s]?v?1\b"]),
    (
        "Artistic-2.0",
        &[
            r"\bArtistic[-_\s]?v?2\.0\b",
            r"\bArtistic[-_\s]?v?2\b",
            r"\bArtistic\s+License\b",
            r"\bArtistic\b",
        ],
    ),
    (
        "Beerware",
        &[
            r"\bBEERWARE\b",
            r"\bBEER\s+LICEN[CS]E\b",
            r"\bBEER[-\s]WARE\b",
            r"^BEER\b",
            r"\bBuy\s+snare\s+a\s+beer\b",
            r"\bWISKY[-_\s]?WARE\b",
        ],
    ),
    ("BSD-2-Clause", &[r"\bBSD[-_\s]?v?2\b", r"^FREEBSD\b", r"^OPENBSD\b"]),
    (
        "BSD-3-Clause",
        &[
            r"\bBSD[-_\s]?v?3\b",
            r"\bBSD[-\s]3[-\s]CLAUSE\b",
            r"\bBDS[-_\s]3[-\s]CLAUSE\b",
            r"\bNEW\s+BSD\b",
            r"\bMODIFIED\s+BSD\b",
            r"^BDS$",
            r"(?-i)^various/BSDish$",
        ],
    ),
    (
        "BSD-4-Clause",
        &[
            r"\bBSD[-_\s]?v?4",
            r"\bBSD\b",
            r"\bBSD\s+LICENSE\b",
            r"\bBSD-4-CLAUSE\b",
            r"^http://en\.wikipedia\.org/wiki/BSD_licenses$",
        ],
    ),
    (
        "BSL-1.0",
        &[
            r"\bBSL[-_\s]?v?1\.0\b",
            r"\bBSL[-_\s]?v?1\b",
            r"^BOOST\b",
            r"\bBOOST\s+SOFTWARE\s+LICENSE\b",
            r"\bBoost\s+License\s+1\.0\b",
        ],
    ),
    (
        "CC0-1.0",
        &[
            r"\bCC0[-_\s]?v?1\.0\b",
            r"\bCC0[-_\s]?v?1\b",
            r"\bCC[-\s]?[0o]\b",
            r"\bCreative\s+Commons\s+0\b",
        ],
    ),
    ("CC-BY-1.0", &[r"\bCC.BY.v?1\.0\b", r"\bCC.BY.v?1\b", r"^CC[-_\s]?BY$"]),
    ("CC-BY-2.0", &[r"\bCC.BY.v?2\.0\b", r"\bCC.BY.v?2(?:[^.\w]|$)"]),
    ("CC-BY-2.5", &[r"\bCC.BY.v?2\.5\b"]),
    ("CC-BY-3.0", &[r"\bCC.BY.v?3\.0\b", r"\bCC.BY.v?3\b"]),
    (
        "CC-BY-4.0",
        &[
            r"^CC[-\s]?BY[-\s]?v?4\.0$",
            r"\bCC.BY.v?4\b",
            r"\bCC.BY.4\.0\b",
            r"\bCREATIVE\s+COMMONS\s+ATTRIBUTION\s+v?4\.0\b",
            r"\bCREATIVE\s+COMMONS\s+ATTRIBUTION\b",
        ],
    ),
    ("CC-BY-SA-1.0", &[r"\bCC[-\s]BY.SA.v?1\.0\b", r"\bCC[-\s]BY.SA.v?1\b"]),
    ("CC-BY-SA-2.0", &[r"\bCC[-\s]BY.SA.v?2\.0\b", r"\bCC[-\s]BY.SA.v?2(?:[^.\w]|$)"]),
    ("CC-BY-SA-2.5", &[r"\bCC[-\s]BY.SA.v?2\.5\b"]),
    (
        "CC-BY-SA-3.0",
        &[
            r"\bCC[-\s]BY.SA.v?3\.0\b",
            r"\bCC[-\s]BY.SA.v?3\b",
            r"\bCC3\.0[-_\s]BY.SA\b",
            r"\bhttp://creativecommons\.org/licenses/by-sa/3\.0/",
        ],
    ),
    ("CC-BY-SA-4.0", &[r"CC[-\s]BY.SA.v?4\.0$", r"\bCC[-\s]BY.SA.v?4\b", r"CCSA-4\.0"]),
    ("CC-BY-NC-1.0", &[r"\bCC[-\s]BY.NC[-\s]?v?1\.0\b", r"\bCC[-\s]BY.NC[-\s]?v?1\b"]),
    ("CC-BY-NC-2.0", &[r"\bCC[-\s]BY.NC[-\s]?v?2\.0\b"]),
    ("CC-BY-NC-2.5", &[r"\bCC[-\s]BY.NC[-\s]?v?2\.5\b"]),
    (
        "CC-BY-NC-3.0",
        &[
            r"\bCC[-\s]BY.NC[-\s]?v?3\.0\b",
            r"\bCC.BY.NC[-\s]?v?3\b",
            r"\bCreative\s+Commons\s+Non-?Commercial,?\s+3\.0\b",
        ],
    ),
    ("CC-BY-NC-4.0", &[r"\bCC[-\s]BY.NC[-\s_]?v?4\.0\b", r"\bCC.BY.NC[-\s_]?v?4\b"]),
    (
        "CC-BY-NC-SA-1.0",
        &[r"\bCC[-\s]BY.NC.SA[-\s]v?1\.0\b", r"\bCC[-\s]BY.NC.SA[-\s]v?1\b"],
    ),
    ("CC-BY-NC-SA-2.0", &[r"\bCC[-\s]?BY.NC.SA[-\s]?v?2\.0\b"]),
    ("CC-BY-NC-SA-2.5", &[r"\bCC[-\s]?BY.NC.SA[-\s]?v?2\.5\b"]),
    (
        "CC-BY-NC-SA-3.0",
        &[
            r"\bCC[-\s]?BY.NC.SA[-\s]?v?3\.0\b",
            r"\bCC[-\s]?BY.NC.SA[-\s]?v?3(?:[^.\w]|$)",
            r"\bBY[-\s]NC[-\s]SA\s+v?3\.0\b",
            r"^http://creativecommons\.org/licenses/by-nc-sa/3\.0/us/$",
        ],
    ),
    (
        "CC-BY-NC-SA-4.0",
        &[
            r"\bCC[-\s]?BY.NC.SA[-\s]?v?4\.0\b",
            r"\bCC[-_\s]BY.NC.SA[-\s]?v?4(?:[^.\w]|$)",
        ],
    ),
    ("CC-BY-ND-1.0", &[r"\bCC[-\s]BY.ND[-\s]?v?1\.0\b"]),
    ("CC-BY-ND-2.0", &[r"\bCC[-\s]BY.ND[-\s]?v?2\.0\b"]),
    ("CC-BY-ND-2.5", &[r"\bCC[-\s]BY.ND[-\s]?v?2\.5\b"]),
    ("CC-BY-ND-3.0", &[r"\bCC[-\s]BY.ND[-\s]?v?3\.0\b"]),
    ("CC-BY-ND-4.0", &[r"\bCC[-\s]BY.ND[-\s]?v?4\.0\b"]),
    (
        "CDDL-1.0",
        &[
            r"\bCDDL[-_\s]?v?1\.0\b",
            r"\bCDDL[-_\s]?v?1\b",
            r"^CDDL$",
            r"\bCDDL\s+LICEN[CS]E\b",
            r"\bCOMMON\s+DEVELOPMENT\s+AND\s+DISTRIBUTION\s+LICENSE\b",
        ],
    ),
    ("CECILL-B", &[r"\bCECILL[-_\s]?B\b"]),
    ("CECILL-C", &[r"\bCECILL[-_\s]?C\b"]),
    (
        "CECILL-1.0",
        &[
            r"\bCECILL[-\s_]?v?1\.0\b",
            r"\bCECILL[-\s_]?v?1\b",
            r"^CECILL$",
            r"\bCECILL\s+v?1\.2\b",
            r"\bhttp://www\.cecill\.info\b",
        ],
    ),
    (
        "CECILL-2.1",
        &[
            r"\bCECILL[-_\s]?2\.1\b",
            r"\bCECILL[-\s_]?v?2\b",
            r"\bCECILL\s+VERSION\s+2\.1\b",
        ],
    ),
    (
        "CPL-1.0",
        &[
            r"\bCPL[-\s_]?v?1\.0\b",
            r"\bCPL[-\s_]?v?1\b",
            r"\bCommon\s+Public\s+License\b",
            r"^CPL$",
        ],
    ),
    (
        "D-FSL-1.0",
        &[
            r"\bD-?FSL[-_\s]?v?1\.0\b",
            r"(?-i)\bD-?FSL[-\s_]?v?1\b",
            r"\bGerman\s+FREE\s+SOFTWARE\b",
            r"\bDeutsche\s+Freie\s+Software\s+Lizenz\b",
        ],
    ),
    ("ECL-1.0", &[r"\bECL[-\s_]?v?1\.0\b", r"\bECL[-\s_]?v?1\b"]),
    (
        "ECL-2.0",
        &[
            r"\bECL[-\s_]?v?2\.0\b",
            r"\bECL[-\s_]?v?2\b",
            r"\bEDUCATIONAL\s+COMMUNITY\s+LICENSE,?\s+VERSION\s+2\.0\b",
        ],
    ),
    ("EFL-1.0", &[r"\bEFL[-\s_]?v?1\.0\b", r"\bEFL[-\s_]?v?1\b"]),
    (
        "EFL-2.0",
        &[
            r"\bEFL[-\s_]?v?2\.0\b",
            r"\bEFL[-\s_]?v?2\b",
            r"\bEiffel\s+Forum\s+License,?\s+version\s+2",
        ],
    ),
    (
        "EPL-2.0",
        &[
            r"\bEPL[-\s_]?v?2\.0\b",
            r"\bEPL[-\s_]?v?2\b",
            r"\bECLIPSE\s+PUBLIC\s+LICENSE\s+v?2\.0\b",
        ],
    ),
    (
        "EPL-1.0",
        &[
            r"\bEPL[-\s_]?v?1\.0\b",
            r"\bEPL[-\s_]?v?1\b",
            r"(?-i)\bEPL\b",
            r"\bECLIPSE\s+PUBLIC\s+LICENSE\s+v?1\.0\b",
            r"\bECLIPSE\s+PUBLIC\s+LICENSE\b",
            r"^ECLIPSE$",
        ],
    ),
    ("EUPL-1.0", &[r"\bEUPL[-\s]?v?1\.0\b"]),
    (
        "EUPL-1.1",
        &[
            r"\bEUPL[-\s]?v?1\.1\b",
            r"\bEUROPEAN\s+UNION\s+PUBLIC\s+LICENSE\s+1\.1\b",
            r"^EUPL$",
        ],
    ),
    ("EUPL-1.2", &[r"\bEUPL[-\s]?v?1\.2\b"]),
    (
        "GPL-1.0",
        &[
            r"\bGPL[-\s_]?v?1\.0\b",
            r"\bGPL[-\s_]?v?1\b",
            r"\bGNU\s+PUBLIC\s+LICEN[SC]E\s+v?1\b",
        ],
    ),
    (
        "GPL-2.0",
        &[
            r"\bGPL[-\s_]?v?2\.0",
            r"\bGPL[-\s_]?v?2\b",
            r"\bGPL\s+v?2\b",
            r"\bGNU\s+PUBLIC\s+LICENSE\s+2\.0\b",
            r"\bGNU\s+PUBLIC\s+License\s+V?2\b",
            r"\bGNU\s+GENERAL\s+PUBLIC\s+LICENSE\s+(?:VERSION\s+)?v?2\b",
            r"\bGNU\s+GPL\s+v2\b",
            r"^GNUv?2\b",
            r"(?-i)^GLPv2\b",
            r"\bWhatever\s+license\s+Plone\s+is\b",
        ],
    ),
    (
        "GPL-3.0",
        &[
            r"\bGPL[-\s_]?v?3\.0\b",
            r"\bGPL[-\s_]?v?3\b",
            r"\bGPL\s+3\b",
            r"\bGNU\s+GENERAL\s+PUBLIC\s+License\s+(?:VERSION\s+)?v?3\b",
            r"\bGNU\s+Public\s+License\s+v?3\.0\b",
            r"\bGNU\s+PUBLIC\s+LICENSE\s+v?3\b",
            r"\bGnu\s+Public\s+License\s+version\s+3\b",
            r"\bGNU\s+PUBLIC\s+v3\b",
            r"\bGPL\b",
            r"\bGNU\s+PL\s+v?3\b",
            r"\bGLPv3\b",
            r"\bGNU3\b",
            r"GPvL3",
            r"\bGNU\s+GLP\s+v?3\b",
        ],
    ),
    ("ISC", &[r"\bISC\s+LICENSE\b", r"\bISCL\b", r"\bISC\b", r"^ICS$"]),
    ("JSON", &[r"\bJSON\s+LICENSE\b"]),
    ("LGPL-2.0", &[r"\bLGPL[-\s_]?v?2\.0\b", r"\bLGPL[-\s_]?v?2(?:[^.\w]|$)"]),
    ("LGPL-2.1", &[r"\bLGPL[-\s_]?v?2\.1\b"]),
    (
        "LGPL-3.0",
        &[
            r"\bLGPL[-\s_]?v?3\b",
            r"\bLGPL[-\s_]?v?3\.0\b",
            r"\bLGPL",
            r"\bLGLP[-\sv]?3\.0\b",
            r"(?-i)^LPLv3$",
            r"\bLESSER\s+GENERAL\s+PUBLIC\s+License\s+v?3\b",
            r"^http://www\.gnu\.org/copyleft/lesser\.html$",
        ],
    ),
    ("MirOS", &[r"\bMirOS\b"]),
    ("MIT", &[r"\bMIT\s+LICEN[SC]E\b", r"\bMIT\b", r"\bEXPAT\b"]),
    ("MPL-1.0", &[r"\bMPL[-\s_]?v?1\.0\b", r"\bMPL[-\s_]?v?1(?:[^.\w]|$)"]),
    ("MPL-1.1", &[r"\bMPL[-\s_]?v?1\.1\b"]),
    (
        "MPL-2.0",
        &[
            r"\bMPL[-\s_]?v?2\.0\b",
            r"\bMPL[-\s_]?v?2\b",
            r"\bMOZILLA\s+PUBLIC\s+LICENSE\s+2\.0\b",
            r"\bMOZILLA\s+PUBLIC\s+LICENSE,?\s+version\s+2\.0\b",
            r"(?-i)\bMPL\s+2\.0\b",
        ],
    ),
    ("MS-PL", &[r"\bMS-?PL\b"]),
    ("MS-RL", &[r"\bMS-?RL\b", r"\bMSR-LA\b"]),
    (
        "NCSA",
        &[
            r"\bNCSA\s+License\b",
            r"\bIllinois/NCSA\s+Open\s+Source\b",
            r"\bNCSA\b",
        ],
    ),
    ("NGPL", &[r"\bNGPL\b"]),
    ("NPOSL-3.0", &[r"\bNPOSL[-\s_]?v?3\.0\b", r"(?-i)\bNPOSL[-\s_]?v?3\b"]),
    (
        "OFL-1.0",
        &[
            r"\bOFL[-\s_]?v?1\.0\b",
            r"\bOFL[-\s_]?v?1(?:[^.\w]|$)",
            r"\bSIL\s+OFL\s+1\.0\b",
        ],
    ),
    ("OFL-1.1", &[r"\bOFL[-\s_]?v?1\.1\b", r"\bSIL\s+OFL\s+1\.1\b"]),
    ("OSL-1.0", &[r"\bOSL[-\s_]?v?1\.0\b", r"\bOSL[-\s_]?v?1(?:[^.\w]|$)"]),
    ("OSL-2.0", &[r"\bOSL[-\s_]?v?2\.0\b", r"\bOSL[-\s_]?v?2(?:[^.\w]|$)"]),
    ("OSL-2.1", &[r"\bOSL[-\s_]?v?2\.1\b"]),
    ("OSL-3.0", &[r"\bOSL[-\s_]?v?3\.0\b", r"\bOSL[-\s_]?v?3(?:[^.\w]|$)"]),
    ("PostgreSQL", &[r"\bPostgreSQL\b"]),
    (
        "Python-2.0",
        &[
            r"\bPython[-\s_]?v?2\.0\b",
            r"\bPython[-\s_]?v?2(?:[^.\w]|$)",
            r"\bPSF[-\s_]?v?2\b",
            r"\bPSFL\b",
            r"\bPSF\b",
            r"\bPython\s+Software\s+Foundation\b",
            r"\bPython\b",
            r"\bPSL\b",
            r"^http://www\.opensource\.org/licenses/PythonSoftFoundation\.php$",
        ],
    ),
    ("RPL-1.1", &[r"\bRPL[-\s_]?v?1\.1\b", r"\bRPL[-\s_]?v?1(?:[^.\w]|$)"]),
    (
        "RPL-1.5",
        &[
            r"\bRPL[-\s_]?v?1\.5\b",
            r"\bhttps?://www\.opensource\.org/licenses/rpl\.php\b",
        ],
    ),
    (
        "QPL-1.0",
        &[
            r"\bQPL[-\s_]?v?1\.0\b",
            r"\bQT\s+Public\s+Licen[cs]e\b",
            r"\bPyQ\s+General\s+License\b",
        ],
    ),
    ("Sleepycat", &[r"\bSleepyCat\b"]),
    ("W3C", &[r"\bW3C\b"]),
    ("OpenSSL", &[r"\bOPENSSL\b"]),
    (
        "Unlicense",
        &[
            r"\bUNLICENSE\b",
            r"^Unlicensed\b",
            r"\bNO\s+LICEN[CS]E\b",
            r"^go\s+for\s+it\b",
            r"^Undecided\b",
        ],
    ),
    (
        "WTFPL",
        &[
            r"\bWTF[PG]?L\b",
            r"\bWTFPL[-v]?2\b",
            r"\bDo\s+whatever\s+you\s+want\b",
            r"\bDWTFYW\b",
            r"\bDo\s+What\s+the\s+Fuck\s+You\s+Want\b",
            r"^DWTFYWT$",
        ],
    ),
    ("WXwindows", &[r"\bwxWINDOWS\s+LIBRARY\s+LICEN[CS]E\b", r"\bWXwindows\b"]),
    ("X11", &[r"\bX11\b"]),
    ("ZPL-1.1", &[r"\bZPL[-\s_]?v?1\.1\b", r"\bZPL[-\s_]?v?1(?:[^.\w]|$)"]),
    (
        "ZPL-2.1",
        &[
            r"\bZPL[-\s_]?v?2\.1\b",
            r"\bZPL[-\s_]?v?2(?:[^.\w]|$)",
            r"\bZPL\s+2\.1\b",
            r"\bZOPE\s+PUBLIC\s+LICENSE\b",
        ],
    ),
    ("zlib-acknowledgement", &[r"\bZLIB[/\-\s]LIBPNG\b"]),
    ("Zlib", &[r"\bZLIB(?:[^-\w]|$)"]),
];

pub fn curated_rules() -> RuleSet {
    RuleSet::compile(CURATED_RULES.iter().copied())
}

pub fn ignore_list() -> IgnoreList {
    IgnoreList::compile(IGNORE_PATTERNS)
}
